//! Payload encoding and OCR text assembly.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::types::{CorrectionRequest, OcrBlock, RecognitionRequest, SelectedFile};

/// Encode file bytes for the JSON transport (standard alphabet, padded).
pub fn encode_file_content(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Build the recognition request body for a selected file.
pub fn recognition_request(file: &SelectedFile) -> RecognitionRequest {
    RecognitionRequest {
        file_content: encode_file_content(&file.bytes),
        file_name: file.name.clone(),
    }
}

/// Join block texts with single spaces.
///
/// Blocks without text still take a slot, yielding an empty fragment.
pub fn join_block_text(blocks: &[OcrBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.text.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the correction request body from recognized blocks.
pub fn correction_request(blocks: &[OcrBlock]) -> CorrectionRequest {
    CorrectionRequest {
        text: join_block_text(blocks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_payload_decodes_to_original_bytes() {
        let bytes: Vec<u8> = (0..=255u8).chain([0, 0, 255]).collect();
        let file = SelectedFile::new("scan.pdf", bytes.clone());

        let request = recognition_request(&file);
        assert_eq!(request.file_name, "scan.pdf");
        assert_eq!(STANDARD.decode(&request.file_content).unwrap(), bytes);
    }

    #[test]
    fn test_encoding_matches_data_url_payload() {
        // Same text FileReader.readAsDataURL puts after the comma
        assert_eq!(encode_file_content(b"hi"), "aGk=");
        assert_eq!(encode_file_content(b""), "");
    }

    #[test]
    fn test_join_two_blocks() {
        let blocks = vec![OcrBlock::with_text("Hello"), OcrBlock::with_text("world")];
        assert_eq!(join_block_text(&blocks), "Hello world");
    }

    #[test]
    fn test_join_empty_sequence() {
        assert_eq!(join_block_text(&[]), "");
    }

    #[test]
    fn test_join_keeps_slot_for_textless_block() {
        let blocks = vec![OcrBlock::default(), OcrBlock::with_text("line")];
        assert_eq!(join_block_text(&blocks), " line");
    }

    #[test]
    fn test_correction_request() {
        let blocks = vec![OcrBlock::with_text("Teh"), OcrBlock::with_text("cat")];
        assert_eq!(correction_request(&blocks).text, "Teh cat");
    }
}
