/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use sandbox_media::ImageErrors;

/// Errors a command can end with
pub enum CliErrors {
    MissingArgument(&'static str),
    UnknownCommand(String),
    Image(ImageErrors),
    Json(serde_json::Error)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(name) => writeln!(f, "Missing required argument {name}"),
            Self::UnknownCommand(name) => writeln!(f, "Unknown command {name}"),
            Self::Image(err) => writeln!(f, "{err:?}"),
            Self::Json(err) => writeln!(f, "Could not serialize output: {err}")
        }
    }
}

impl From<ImageErrors> for CliErrors {
    fn from(value: ImageErrors) -> Self {
        CliErrors::Image(value)
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::Image(ImageErrors::IoErrors(value))
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        CliErrors::Json(value)
    }
}
