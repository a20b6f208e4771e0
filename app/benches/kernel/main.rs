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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use rayon::prelude::*;
use yuv_kernel::{
    ChromaBias, PixelKernel, RgbChannels, YuvPacked444Format, YuvPixel, YuvToRgbConverter,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;
    let mut rng = rand::rng();
    let src: Vec<u8> = (0..width * height * 4)
        .map(|_| rng.random_range(0..256) as u8)
        .collect();
    let src_pixels: &[[u8; 4]] = bytemuck::cast_slice(&src);

    let kernel = YuvToRgbConverter::ANALOG.packed(YuvPacked444Format::Yuva, RgbChannels::Rgba);
    let legacy_kernel = YuvToRgbConverter::ANALOG
        .with_chroma_bias(ChromaBias::Wrapping)
        .packed(YuvPacked444Format::Ayuv, RgbChannels::Rgba);

    c.bench_function("yuv-kernel YUVA -> RGBA 1080p", |b| {
        let mut dst = vec![[0u8; 4]; width * height];
        b.iter(|| {
            for (y, (src, dst)) in src_pixels
                .chunks_exact(width)
                .zip(dst.chunks_exact_mut(width))
                .enumerate()
            {
                for (x, (src, dst)) in src.iter().zip(dst.iter_mut()).enumerate() {
                    *dst = kernel.invoke(*src, x as u32, y as u32);
                }
            }
        })
    });

    c.bench_function("yuv-kernel AYUV -> RGBA 1080p wrapping bias", |b| {
        let mut dst = vec![[0u8; 4]; width * height];
        b.iter(|| {
            for (y, (src, dst)) in src_pixels
                .chunks_exact(width)
                .zip(dst.chunks_exact_mut(width))
                .enumerate()
            {
                for (x, (src, dst)) in src.iter().zip(dst.iter_mut()).enumerate() {
                    *dst = legacy_kernel.invoke(*src, x as u32, y as u32);
                }
            }
        })
    });

    c.bench_function("yuv-kernel YUVA -> RGBA 1080p rayon", |b| {
        let mut dst = vec![[0u8; 4]; width * height];
        b.iter(|| {
            dst.par_chunks_exact_mut(width)
                .zip(src_pixels.par_chunks_exact(width))
                .enumerate()
                .for_each(|(y, (dst, src))| {
                    for (x, (src, dst)) in src.iter().zip(dst.iter_mut()).enumerate() {
                        *dst = kernel.invoke(*src, x as u32, y as u32);
                    }
                });
        })
    });

    c.bench_function("yuv-kernel typed pixel 1080p", |b| {
        let converter = YuvToRgbConverter::ANALOG;
        let pixels: Vec<YuvPixel> = src_pixels.iter().map(|&px| YuvPixel::from(px)).collect();
        b.iter(|| {
            let mut acc = 0u32;
            for (i, px) in pixels.iter().enumerate() {
                let rgb = converter.invoke(*px, (i % width) as u32, (i / width) as u32);
                acc = acc.wrapping_add(rgb.r as u32);
            }
            acc
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
