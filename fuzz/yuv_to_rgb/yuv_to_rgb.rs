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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv_kernel::{
    yuv_to_rgb, ChromaBias, Narrowing, PixelKernel, RgbChannels, RgbaPixel, YuvPacked444Format,
    YuvPixel, YuvStandardMatrix, YuvToRgbConverter,
};

fuzz_target!(|data: (u8, u8, u8, u8, u32, u32, f32, f32)| {
    let pixel = YuvPixel::new(data.0, data.1, data.2, data.3);
    fuzz_analog(pixel, data.4, data.5);
    fuzz_packed(pixel, data.4, data.5);
    fuzz_custom_matrix(pixel, data.6, data.7);
});

fn fuzz_analog(pixel: YuvPixel, x: u32, y: u32) {
    let rgb = yuv_to_rgb(pixel, x, y);
    assert_eq!(rgb.a, 255);
    assert_eq!(rgb, yuv_to_rgb(pixel, 0, 0));

    let neutral = YuvPixel::new(pixel.y, 128, 128, pixel.a);
    for bias in [ChromaBias::Signed, ChromaBias::Wrapping] {
        for narrowing in [Narrowing::Truncate, Narrowing::RoundNearest] {
            let converter = YuvToRgbConverter::ANALOG
                .with_chroma_bias(bias)
                .with_narrowing(narrowing);
            assert_eq!(
                converter.invoke(neutral, x, y),
                RgbaPixel::new(pixel.y, pixel.y, pixel.y, 255)
            );
            assert_eq!(converter.invoke(pixel, x, y).a, 255);
        }
    }
}

fn fuzz_packed(pixel: YuvPixel, x: u32, y: u32) {
    let expected = YuvToRgbConverter::ANALOG.convert(pixel);
    for format in [
        YuvPacked444Format::Yuva,
        YuvPacked444Format::Ayuv,
        YuvPacked444Format::Vuya,
    ] {
        for channels in [RgbChannels::Rgba, RgbChannels::Bgra] {
            let kernel = YuvToRgbConverter::ANALOG.packed(format, channels);
            let rgb = kernel.invoke(pixel.to_packed(format), x, y);
            assert_eq!(rgb, expected.to_packed(channels));
        }
    }
}

fn fuzz_custom_matrix(pixel: YuvPixel, kr: f32, kb: f32) {
    // degenerate matrices are rejected, anything accepted must stay total
    if let Ok(converter) = YuvToRgbConverter::new(
        YuvStandardMatrix::Custom(kr, kb),
        ChromaBias::Signed,
        Narrowing::Truncate,
    ) {
        assert_eq!(converter.convert(pixel).a, 255);
    }
}
