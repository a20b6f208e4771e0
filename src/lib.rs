/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Per-pixel YUV to RGB conversion kernel.
//!
//! The crate provides a pure per-pixel transform intended to be driven by an
//! external dispatcher that owns buffers and scheduling. Every invocation is
//! independent, so kernels can be freely run across threads, SIMD lanes or
//! work-items.
//!
//! ```
//! use yuv_kernel::{yuv_to_rgb, RgbaPixel, YuvPixel};
//!
//! let rgb = yuv_to_rgb(YuvPixel::new(76, 84, 255, 255), 0, 0);
//! assert_eq!(rgb, RgbaPixel::new(254, 0, 0, 255));
//! ```
mod kernel;
mod numerics;
mod pixel;
mod yuv_error;
mod yuv_support;
mod yuv_to_rgb;

pub use kernel::{KernelRegistration, PixelKernel};
pub use pixel::{RgbaPixel, YuvPixel};
pub use yuv_error::{MismatchedSize, YuvError};
pub use yuv_support::{
    get_inverse_transform, CbCrInverseTransform, ChromaBias, Narrowing, RgbChannels, YuvBias,
    YuvPacked444Format, YuvStandardMatrix,
};
pub use yuv_to_rgb::{
    yuv_to_rgb, PackedYuvToRgb, YuvToRgbConverter, YUV_TO_RGB_PIXEL_REGISTRATION,
    YUV_TO_RGB_REGISTRATION,
};
