use dicom::core::Tag;

use crate::dicom_access::ElementAccess;
use crate::models::ImageDescriptor;

/// Substituted when an identifying tag is absent from the dataset.
pub const MISSING_TAG_SENTINEL: &str = "N/A";

fn text_or_sentinel<T: ElementAccess>(obj: &T, tag: Tag) -> String {
    obj.element_str(tag)
        .unwrap_or_else(|| MISSING_TAG_SENTINEL.to_string())
}

/// Read the identifying tags logged for every file.
pub fn extract_descriptor<T: ElementAccess>(obj: &T) -> ImageDescriptor {
    ImageDescriptor {
        series_description: text_or_sentinel(obj, Tag(0x0008, 0x103E)),
        study_date: text_or_sentinel(obj, Tag(0x0008, 0x0020)),
    }
}
