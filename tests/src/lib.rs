/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use nanorand::Rng;
use sandbox_media::{Image, PixelFormat};

mod bmp;
mod jpeg;
mod png;
mod scenario;
mod tga;

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A path in the temporary directory no other test uses
pub fn temp_path(extension: &str) -> PathBuf {
    let counter = FILE_COUNTER.fetch_add(1, Ordering::Relaxed);

    std::env::temp_dir().join(format!(
        "sandbox-test-{}-{counter}.{extension}",
        std::process::id()
    ))
}

/// An image filled with random pixels
pub fn random_image<F: PixelFormat>(width: usize, height: usize) -> Image<F> {
    let mut rand = nanorand::WyRand::new();
    let mut image = Image::<F>::new(width, height).unwrap();

    rand.fill_bytes(image.as_bytes_mut());

    image
}
