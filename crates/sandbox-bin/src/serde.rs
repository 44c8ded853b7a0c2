/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use sandbox_media::codecs::ImageInfo;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What `probe` prints for a single file
pub struct Metadata<'a> {
    file: OsString,
    size: u64,
    info: &'a ImageInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, info: &'a ImageInfo) -> Metadata<'a> {
        Metadata { file, size, info }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageMetadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("metadata", &self.info)?;

        state.end()
    }
}
