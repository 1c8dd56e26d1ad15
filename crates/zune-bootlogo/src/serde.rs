/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use alloc::format;
use alloc::string::String;

use serde::ser::*;

use crate::device::{Compatibility, DeviceProfile};
use crate::partition::{LogoPayloadHeader, PartitionEntry, PartitionTable, PartitionTableHeader};

fn magic_str(magic: &[u8; 4]) -> String {
    magic.iter().map(|x| char::from(*x)).collect()
}

impl Serialize for PartitionTableHeader {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PartitionTableHeader", 4)?;

        state.serialize_field("magic", &magic_str(&self.magic))?;
        state.serialize_field("file_size", &self.file_size)?;
        state.serialize_field("table_offset", &self.table_offset)?;
        state.serialize_field("table_size", &self.table_size)?;

        state.end()
    }
}

impl Serialize for PartitionEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PartitionEntry", 3)?;

        state.serialize_field("name", &self.name)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("offset", &self.offset)?;

        state.end()
    }
}

impl Serialize for PartitionTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PartitionTable", 2)?;

        state.serialize_field("header", &self.header)?;
        state.serialize_field("entries", &self.entries)?;

        state.end()
    }
}

impl Serialize for LogoPayloadHeader {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("LogoPayloadHeader", 4)?;

        state.serialize_field("magic", &magic_str(&self.magic))?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        // tags read better in hex
        state.serialize_field("format_tag", &format!("{:#010x}", self.format_tag))?;

        state.end()
    }
}

impl Serialize for DeviceProfile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DeviceProfile", 3)?;

        state.serialize_field("id", &self.id)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;

        state.end()
    }
}

impl Serialize for Compatibility {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // like colorspaces, the verdict is its debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}
