/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Application state
//!
//! State is a plain value, every transition consumes it and returns the next state.
//! The codec never sees it, commands pull the raster out and hand it over.
use zune_bootlogo::constants::DEFAULT_FILE_NAME;
use zune_bootlogo::{encode, BootLogoEncodeErrors, Compatibility, DeviceProfile, Raster};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    raster:    Option<Raster>,
    device:    Option<DeviceProfile>,
    file_name: Option<String>
}

impl AppState {
    pub fn new() -> AppState {
        AppState::default()
    }

    /// Replace the current image
    #[must_use]
    pub fn with_raster(self, raster: Raster) -> AppState {
        AppState {
            raster: Some(raster),
            ..self
        }
    }

    /// Select or deselect the target device
    #[must_use]
    pub fn with_device(self, device: Option<DeviceProfile>) -> AppState {
        AppState { device, ..self }
    }

    /// Set the name the encoded file is saved under
    #[must_use]
    pub fn with_file_name(self, name: &str) -> AppState {
        AppState {
            file_name: Some(name.to_string()),
            ..self
        }
    }

    /// Drop the current image, keeping the device and file name
    #[must_use]
    pub fn cleared(self) -> AppState {
        AppState {
            raster: None,
            ..self
        }
    }

    pub fn raster(&self) -> Option<&Raster> {
        self.raster.as_ref()
    }

    pub fn device(&self) -> Option<&DeviceProfile> {
        self.device.as_ref()
    }

    /// Output file name, `isp_part.bin` unless one was set
    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    /// Compatibility of the current image with the current device
    ///
    /// `None` when there is no image
    pub fn compatibility(&self) -> Option<Compatibility> {
        self.raster
            .as_ref()
            .map(|raster| Compatibility::check(raster.dimensions(), self.device()))
    }

    /// Encode the current image
    ///
    /// No image is treated like an empty one
    pub fn encode(&self) -> Result<Vec<u8>, BootLogoEncodeErrors> {
        match &self.raster {
            Some(raster) => encode(raster),
            None => Err(BootLogoEncodeErrors::EmptyRaster)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: u32, height: u32) -> Raster {
        Raster::filled(width, height, [10, 20, 30, 255]).unwrap()
    }

    #[test]
    fn transitions_leave_previous_state_alone() {
        let empty = AppState::new();
        let loaded = empty.clone().with_raster(raster(2, 2));

        assert!(empty.raster().is_none());
        assert_eq!(loaded.raster().map(Raster::dimensions), Some((2, 2)));
        assert_eq!(loaded.file_name(), "isp_part.bin");
    }

    #[test]
    fn compatibility_follows_device() {
        let state = AppState::new().with_raster(raster(4, 3));
        assert_eq!(state.compatibility(), Some(Compatibility::Unknown));

        let state = state.with_device(Some(DeviceProfile::new("panel", 4, 3)));
        assert_eq!(state.compatibility(), Some(Compatibility::Match));

        let state = state.with_raster(raster(3, 4));
        assert!(matches!(
            state.compatibility(),
            Some(Compatibility::Mismatch { .. })
        ));

        let state = state.cleared();
        assert_eq!(state.compatibility(), None);
        assert_eq!(state.device().map(|d| d.id.as_str()), Some("panel"));
    }

    #[test]
    fn encode_uses_current_raster() {
        let state = AppState::new().with_file_name("logo_a.bin");
        assert!(matches!(
            state.encode(),
            Err(BootLogoEncodeErrors::EmptyRaster)
        ));
        assert_eq!(state.file_name(), "logo_a.bin");

        let state = state.with_raster(raster(2, 1));
        assert_eq!(state.encode().unwrap().len(), 0x50 + 8);
    }
}
