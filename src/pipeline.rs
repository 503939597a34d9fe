//
// pipeline.rs
// dicom-edge
//
// Decode -> edge detection -> encode for a single file. The output dataset is
// built from the original metadata plus the new pixel buffer and dimensions.
//

use std::borrow::Cow;
use std::path::Path;

use dicom::core::{DataElement, PrimitiveValue, Tag, VR};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{open_file, DefaultDicomObject, FileDicomObject, FileMetaTableBuilder};
use dicom::pixeldata::PixelDecoder;
use dicom::transfer_syntax::entries::EXPLICIT_VR_LITTLE_ENDIAN;
use tracing::debug;

use crate::config::RunConfiguration;
use crate::edges::{self, EdgeVolume};
use crate::errors::ProcessError;
use crate::metadata;
use crate::models::ProcessedFile;

/// Process one file end to end: parse it as DICOM, detect edges in its pixel
/// data, and write the result under the same filename into `output_dir`.
///
/// Every failure is reported as a tagged [`ProcessError`]; the caller decides
/// whether to continue the batch.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    config: &RunConfiguration,
) -> Result<ProcessedFile, ProcessError> {
    let obj = open_file(input).map_err(|e| ProcessError::Decode(Box::new(e)))?;

    let descriptor = metadata::extract_descriptor(&obj);
    debug!(
        "SeriesDescription: {}, StudyDate: {}",
        descriptor.series_description, descriptor.study_date
    );

    // Decoding fails here for datasets that carry no pixel data at all,
    // the most common bad input in practice.
    let decoded = obj
        .decode_pixel_data()
        .map_err(|e| ProcessError::PixelData(Box::new(e)))?;
    let edge_volume = edges::detect(&decoded, config.threshold1, config.threshold2)?;
    drop(decoded);

    let shape = edge_volume.logical_shape();
    debug!("edge volume shape: {:?}", shape);
    let (rows, columns) = edges::resolve_dimensions(&shape)?;

    let filename = input
        .file_name()
        .ok_or_else(|| ProcessError::Encode("input path has no file name".to_string().into()))?;
    let output_path = output_dir.join(filename);
    encode_output(obj, &edge_volume, rows, columns, &output_path)?;

    Ok(ProcessedFile {
        output_path,
        rows,
        columns,
        frames: edge_volume.frames,
    })
}

/// Rewrite the dataset around the edge map: same metadata, new pixel buffer,
/// and pixel-format attributes updated to describe signed 16-bit monochrome
/// samples so the declared layout matches the written buffer.
fn encode_output(
    obj: DefaultDicomObject,
    edge_volume: &EdgeVolume,
    rows: u16,
    columns: u16,
    output: &Path,
) -> Result<(), ProcessError> {
    let mut dataset = obj.into_inner();

    dataset.put(DataElement::new(
        Tag(0x7FE0, 0x0010),
        VR::OW,
        PrimitiveValue::from(edge_volume.to_le_bytes()),
    )); // Pixel Data
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0010),
        VR::US,
        PrimitiveValue::from(rows),
    )); // Rows
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0011),
        VR::US,
        PrimitiveValue::from(columns),
    )); // Columns
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0002),
        VR::US,
        PrimitiveValue::from(1_u16),
    )); // Samples per Pixel
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0004),
        VR::CS,
        PrimitiveValue::from("MONOCHROME2"),
    )); // Photometric Interpretation
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0008),
        VR::IS,
        PrimitiveValue::from(edge_volume.frames.to_string()),
    )); // Number of Frames
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0100),
        VR::US,
        PrimitiveValue::from(16_u16),
    )); // Bits Allocated
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0101),
        VR::US,
        PrimitiveValue::from(16_u16),
    )); // Bits Stored
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0102),
        VR::US,
        PrimitiveValue::from(15_u16),
    )); // High Bit
    dataset.put(DataElement::new(
        Tag(0x0028, 0x0103),
        VR::US,
        PrimitiveValue::from(1_u16),
    )); // Pixel Representation (signed)

    // Regenerate file meta for uncompressed output, keeping the SOP identity.
    let sop_class_uid = dataset
        .element(Tag(0x0008, 0x0016))
        .ok()
        .and_then(|e| e.to_str().ok())
        .unwrap_or(Cow::Borrowed("1.2.840.10008.5.1.4.1.1.7"));
    let sop_instance_uid = dataset
        .element(Tag(0x0008, 0x0018))
        .ok()
        .and_then(|e| e.to_str().ok())
        .unwrap_or(Cow::Borrowed("1.2.3.4.5"));

    let file_meta = FileMetaTableBuilder::new()
        .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN.uid())
        .media_storage_sop_class_uid(sop_class_uid.as_ref())
        .media_storage_sop_instance_uid(sop_instance_uid.as_ref())
        .build()
        .map_err(|e| ProcessError::Encode(Box::new(e)))?;

    let mut file_obj =
        FileDicomObject::new_empty_with_dict_and_meta(StandardDataDictionary, file_meta);
    for elem in dataset {
        file_obj.put(elem);
    }

    file_obj
        .write_to_file(output)
        .map_err(|e| ProcessError::Encode(Box::new(e)))?;

    Ok(())
}
