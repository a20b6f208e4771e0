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
use yuv_kernel::{
    ChromaBias, Narrowing, PixelKernel, RgbChannels, YuvPacked444Format, YuvPixel,
    YuvStandardMatrix, YuvToRgbConverter,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let signed = YuvToRgbConverter::new(
        YuvStandardMatrix::Analog,
        ChromaBias::Signed,
        Narrowing::Truncate,
    )
    .unwrap();
    let wrapping = YuvToRgbConverter::new(
        YuvStandardMatrix::Analog,
        ChromaBias::Wrapping,
        Narrowing::Truncate,
    )
    .unwrap();
    let bt709 = YuvToRgbConverter::new(
        YuvStandardMatrix::Bt709,
        ChromaBias::Signed,
        Narrowing::RoundNearest,
    )
    .unwrap();

    println!("{}", signed.registration());
    println!(
        "{}",
        signed
            .packed(YuvPacked444Format::Ayuv, RgbChannels::Rgba)
            .registration()
    );

    let samples = [
        YuvPixel::new(0, 128, 128, 255),
        YuvPixel::new(255, 128, 128, 255),
        YuvPixel::new(76, 84, 255, 255),
        YuvPixel::new(149, 43, 21, 255),
        YuvPixel::new(29, 255, 107, 255),
        YuvPixel::new(100, 128, 130, 0),
    ];

    for (i, px) in samples.iter().enumerate() {
        let x = i as u32;
        println!(
            "{:?} -> signed {:?}, wrapping {:?}, bt709 {:?}",
            px,
            signed.invoke(*px, x, 0),
            wrapping.invoke(*px, x, 0),
            bt709.invoke(*px, x, 0),
        );
    }
}
