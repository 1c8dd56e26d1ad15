/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_bootlogo::constants::MIME_TYPE;
use zune_bootlogo::{Compatibility, DeviceProfile, LogoPayloadHeader, PartitionTable};

use crate::file_io::InputKind;

/// What `probe` prints for a single file
pub struct ProbeReport<'a> {
    pub file:          &'a Path,
    pub size:          usize,
    pub kind:          InputKind,
    pub table:         Option<&'a PartitionTable>,
    pub payload:       Option<&'a LogoPayloadHeader>,
    pub dimensions:    Option<(u32, u32)>,
    pub device:        Option<&'a DeviceProfile>,
    pub compatibility: Option<Compatibility>
}

impl<'a> ProbeReport<'a> {
    pub fn new(file: &'a Path, size: usize, kind: InputKind) -> ProbeReport<'a> {
        ProbeReport {
            file,
            size,
            kind,
            table: None,
            payload: None,
            dimensions: None,
            device: None,
            compatibility: None
        }
    }
}

impl<'a> Serialize for ProbeReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ProbeReport", 9)?;

        let (kind, mime) = match self.kind {
            InputKind::PartitionFile => ("partition", Some(MIME_TYPE)),
            InputKind::Image => ("image", None)
        };

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("kind", kind)?;
        state.serialize_field("mime", &mime)?;
        state.serialize_field("table", &self.table)?;
        state.serialize_field("payload", &self.payload)?;
        state.serialize_field("dimensions", &self.dimensions)?;
        state.serialize_field("device", &self.device)?;
        state.serialize_field("compatibility", &self.compatibility)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use zune_bootlogo::{encode, BootLogoDecoder, Raster};

    use super::*;

    #[test]
    fn partition_reports_carry_headers() {
        let file = encode(&Raster::filled(2, 3, [0; 4]).unwrap()).unwrap();
        let mut decoder = BootLogoDecoder::new(&file);
        decoder.decode_headers().unwrap();

        let device = DeviceProfile::new("panel", 2, 3);
        let mut report = ProbeReport::new(Path::new("isp_part.bin"), file.len(), InputKind::PartitionFile);
        report.table = decoder.partition_table();
        report.payload = decoder.payload_header();
        report.dimensions = decoder.dimensions();
        report.device = Some(&device);
        report.compatibility = Some(Compatibility::Match);

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["kind"], "partition");
        assert_eq!(json["mime"], "application/octet-stream");
        assert_eq!(json["size"], 0x50 + 24);
        assert_eq!(json["table"]["entries"][0]["name"], "logo.bin");
        assert_eq!(json["payload"]["format_tag"], "0x000e0003");
        assert_eq!(json["dimensions"][1], 3);
        assert_eq!(json["device"]["id"], "panel");
        assert_eq!(json["compatibility"], "Match");
    }

    #[test]
    fn image_reports_leave_headers_null() {
        let report = ProbeReport::new(Path::new("logo.png"), 10, InputKind::Image);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["kind"], "image");
        assert!(json["mime"].is_null());
        assert!(json["table"].is_null());
        assert!(json["compatibility"].is_null());
    }
}
