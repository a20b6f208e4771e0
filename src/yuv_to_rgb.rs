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
use crate::kernel::{KernelRegistration, PixelKernel};
use crate::numerics::saturate_narrow;
use crate::yuv_support::{
    CbCrInverseTransform, ChromaBias, Narrowing, RgbChannels, YuvPacked444Format,
    YuvStandardMatrix,
};
use crate::{RgbaPixel, YuvError, YuvPixel};
use log::debug;

/// Registration of the packed `[u8; 4] -> [u8; 4]` kernel
pub const YUV_TO_RGB_REGISTRATION: KernelRegistration = KernelRegistration::new("yuvToRgb", 1);

/// Registration of the typed [YuvPixel] -> [RgbaPixel] kernel
pub const YUV_TO_RGB_PIXEL_REGISTRATION: KernelRegistration =
    KernelRegistration::new("yuvToRgbPixel", 1);

/// Converts one 8-bit YUV sample into one opaque 8-bit RGB sample.
///
/// The conversion is done in `f32`:
///
/// ```text
/// U = bias(u), V = bias(v)
/// R = Y + cr_coef * V
/// G = Y - g_coeff_2 * U - g_coeff_1 * V
/// B = Y + cb_coef * U
/// ```
///
/// Every channel is clamped to [0, 255] and then narrowed according to [Narrowing].
/// Output alpha is always 255, input alpha and pixel coordinates are ignored.
///
/// The converter holds only coefficients and is `Copy`, the same instance may be
/// invoked from any number of threads at once.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct YuvToRgbConverter {
    transform: CbCrInverseTransform<f32>,
    chroma_bias: ChromaBias,
    narrowing: Narrowing,
}

impl Default for YuvToRgbConverter {
    fn default() -> Self {
        YuvToRgbConverter::ANALOG
    }
}

impl YuvToRgbConverter {
    /// Analog BT.601 constants, signed chroma bias, truncating narrowing
    pub const ANALOG: YuvToRgbConverter = YuvToRgbConverter::analog();

    pub const fn analog() -> YuvToRgbConverter {
        YuvToRgbConverter {
            transform: CbCrInverseTransform::ANALOG,
            chroma_bias: ChromaBias::Signed,
            narrowing: Narrowing::Truncate,
        }
    }

    /// Builds a converter for an arbitrary matrix.
    ///
    /// # Errors
    ///
    /// [YuvError::DegenerateMatrix] when `1 - kr - kb == 0` or derived coefficients are not finite.
    pub fn new(
        matrix: YuvStandardMatrix,
        chroma_bias: ChromaBias,
        narrowing: Narrowing,
    ) -> Result<YuvToRgbConverter, YuvError> {
        let transform = matrix.inverse_transform()?;
        debug!(
            "YUV -> RGB transform for {:?}: {:?}, bias {:?}, narrowing {:?}",
            matrix, transform, chroma_bias, narrowing
        );
        if chroma_bias == ChromaBias::Wrapping {
            debug!("Chroma bias is removed with 8-bit wraparound, U/V below 128 map to u + 128");
        }
        Ok(YuvToRgbConverter {
            transform,
            chroma_bias,
            narrowing,
        })
    }

    pub const fn with_chroma_bias(self, chroma_bias: ChromaBias) -> YuvToRgbConverter {
        YuvToRgbConverter {
            chroma_bias,
            ..self
        }
    }

    pub const fn with_narrowing(self, narrowing: Narrowing) -> YuvToRgbConverter {
        YuvToRgbConverter { narrowing, ..self }
    }

    pub const fn transform(&self) -> CbCrInverseTransform<f32> {
        self.transform
    }

    pub const fn chroma_bias(&self) -> ChromaBias {
        self.chroma_bias
    }

    pub const fn narrowing(&self) -> Narrowing {
        self.narrowing
    }

    #[inline(always)]
    pub fn convert(&self, pixel: YuvPixel) -> RgbaPixel {
        let ts = &self.transform;
        let y_value = pixel.y as f32;
        let cb_value = self.chroma_bias.apply(pixel.u);
        let cr_value = self.chroma_bias.apply(pixel.v);

        let r = y_value + ts.cr_coef * cr_value;
        let g = y_value - ts.g_coeff_2 * cb_value - ts.g_coeff_1 * cr_value;
        let b = y_value + ts.cb_coef * cb_value;

        RgbaPixel {
            r: saturate_narrow::<u8>(r, 255f32, self.narrowing),
            g: saturate_narrow::<u8>(g, 255f32, self.narrowing),
            b: saturate_narrow::<u8>(b, 255f32, self.narrowing),
            a: 255,
        }
    }

    /// Kernel over raw packed samples in the given layouts
    pub fn packed(self, format: YuvPacked444Format, channels: RgbChannels) -> PackedYuvToRgb {
        PackedYuvToRgb {
            converter: self,
            format,
            channels,
            executor: make_executor(format, channels),
        }
    }
}

impl PixelKernel for YuvToRgbConverter {
    type Input = YuvPixel;
    type Output = RgbaPixel;

    fn registration(&self) -> KernelRegistration {
        YUV_TO_RGB_PIXEL_REGISTRATION
    }

    #[inline(always)]
    fn invoke(&self, input: YuvPixel, _: u32, _: u32) -> RgbaPixel {
        self.convert(input)
    }
}

type PackedExecutor = fn(&YuvToRgbConverter, [u8; 4]) -> [u8; 4];

#[inline(always)]
fn packed_executor<const PACKED: u8, const DST: u8>(
    converter: &YuvToRgbConverter,
    src: [u8; 4],
) -> [u8; 4] {
    let packed: YuvPacked444Format = PACKED.into();
    let cn: RgbChannels = DST.into();
    converter
        .convert(YuvPixel::from_packed(src, packed))
        .to_packed(cn)
}

fn make_executor(format: YuvPacked444Format, channels: RgbChannels) -> PackedExecutor {
    match (format, channels) {
        (YuvPacked444Format::Yuva, RgbChannels::Rgba) => packed_executor::<
            { YuvPacked444Format::Yuva as u8 },
            { RgbChannels::Rgba as u8 },
        >,
        (YuvPacked444Format::Yuva, RgbChannels::Bgra) => packed_executor::<
            { YuvPacked444Format::Yuva as u8 },
            { RgbChannels::Bgra as u8 },
        >,
        (YuvPacked444Format::Ayuv, RgbChannels::Rgba) => packed_executor::<
            { YuvPacked444Format::Ayuv as u8 },
            { RgbChannels::Rgba as u8 },
        >,
        (YuvPacked444Format::Ayuv, RgbChannels::Bgra) => packed_executor::<
            { YuvPacked444Format::Ayuv as u8 },
            { RgbChannels::Bgra as u8 },
        >,
        (YuvPacked444Format::Vuya, RgbChannels::Rgba) => packed_executor::<
            { YuvPacked444Format::Vuya as u8 },
            { RgbChannels::Rgba as u8 },
        >,
        (YuvPacked444Format::Vuya, RgbChannels::Bgra) => packed_executor::<
            { YuvPacked444Format::Vuya as u8 },
            { RgbChannels::Bgra as u8 },
        >,
    }
}

/// [YuvToRgbConverter] bound to packed source and destination layouts
#[derive(Debug, Copy, Clone)]
pub struct PackedYuvToRgb {
    converter: YuvToRgbConverter,
    format: YuvPacked444Format,
    channels: RgbChannels,
    executor: PackedExecutor,
}

impl PackedYuvToRgb {
    pub const fn converter(&self) -> &YuvToRgbConverter {
        &self.converter
    }

    pub const fn format(&self) -> YuvPacked444Format {
        self.format
    }

    pub const fn channels(&self) -> RgbChannels {
        self.channels
    }
}

impl PixelKernel for PackedYuvToRgb {
    type Input = [u8; 4];
    type Output = [u8; 4];

    fn registration(&self) -> KernelRegistration {
        YUV_TO_RGB_REGISTRATION
    }

    #[inline(always)]
    fn invoke(&self, input: [u8; 4], _: u32, _: u32) -> [u8; 4] {
        (self.executor)(&self.converter, input)
    }
}

/// Converts one YUV sample with analog BT.601 constants, signed chroma bias and truncation.
///
/// `x` and `y` are the pixel coordinates supplied by the dispatcher, they do not
/// affect the result.
#[inline]
pub fn yuv_to_rgb(pixel: YuvPixel, x: u32, y: u32) -> RgbaPixel {
    YuvToRgbConverter::ANALOG.invoke(pixel, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const ALL_MODES: [(ChromaBias, Narrowing); 4] = [
        (ChromaBias::Signed, Narrowing::Truncate),
        (ChromaBias::Signed, Narrowing::RoundNearest),
        (ChromaBias::Wrapping, Narrowing::Truncate),
        (ChromaBias::Wrapping, Narrowing::RoundNearest),
    ];

    fn reference(pixel: YuvPixel, bias: ChromaBias, narrowing: Narrowing) -> [u8; 3] {
        let remove_bias = |v: u8| -> f64 {
            match bias {
                ChromaBias::Signed => v as f64 - 128.,
                ChromaBias::Wrapping => v.wrapping_sub(128) as f64,
            }
        };
        let y = pixel.y as f64;
        let u = remove_bias(pixel.u);
        let v = remove_bias(pixel.v);
        let rgb = [
            y + 1.402 * v,
            y - 0.344 * u - 0.714 * v,
            y + 1.772 * u,
        ];
        rgb.map(|c| {
            let c = c.clamp(0., 255.);
            match narrowing {
                Narrowing::Truncate => c.trunc() as u8,
                Narrowing::RoundNearest => c.round() as u8,
            }
        })
    }

    #[test]
    fn test_neutral_chroma_is_gray() {
        for (bias, narrowing) in ALL_MODES {
            let converter = YuvToRgbConverter::ANALOG
                .with_chroma_bias(bias)
                .with_narrowing(narrowing);
            for y in 0..=255u8 {
                let rgb = converter.convert(YuvPixel::new(y, 128, 128, 255));
                assert_eq!(
                    rgb,
                    RgbaPixel::new(y, y, y, 255),
                    "Neutral chroma failed for y {} in mode {:?} {:?}",
                    y,
                    bias,
                    narrowing
                );
            }
        }
    }

    #[test]
    fn test_black_and_white() {
        assert_eq!(
            yuv_to_rgb(YuvPixel::new(255, 128, 128, 255), 0, 0),
            RgbaPixel::new(255, 255, 255, 255)
        );
        assert_eq!(
            yuv_to_rgb(YuvPixel::new(0, 128, 128, 255), 0, 0),
            RgbaPixel::new(0, 0, 0, 255)
        );
    }

    #[test]
    fn test_red_sample_signed_bias() {
        // R = 76 + 1.402 * 127 = 254.054
        // G = 76 + 0.344 * 44 - 0.714 * 127 = 0.458
        // B = 76 - 1.772 * 44 = -1.968
        assert_eq!(
            yuv_to_rgb(YuvPixel::new(76, 84, 255, 255), 0, 0),
            RgbaPixel::new(254, 0, 0, 255)
        );
    }

    #[test]
    fn test_red_sample_wrapping_bias() {
        // U wraps to 212:
        // G = 76 - 0.344 * 212 - 0.714 * 127 = -87.606
        // B = 76 + 1.772 * 212 = 451.664
        let converter = YuvToRgbConverter::ANALOG.with_chroma_bias(ChromaBias::Wrapping);
        assert_eq!(
            converter.convert(YuvPixel::new(76, 84, 255, 255)),
            RgbaPixel::new(254, 0, 255, 255)
        );
    }

    #[test]
    fn test_narrowing_modes() {
        let px = YuvPixel::new(100, 128, 130, 255);
        let truncating = YuvToRgbConverter::ANALOG;
        assert_eq!(truncating.convert(px), RgbaPixel::new(102, 98, 100, 255));
        let rounding = YuvToRgbConverter::ANALOG.with_narrowing(Narrowing::RoundNearest);
        assert_eq!(rounding.convert(px), RgbaPixel::new(103, 99, 100, 255));
    }

    #[test]
    fn test_alpha_is_always_opaque() {
        for a in 0..=255u8 {
            let rgb = yuv_to_rgb(YuvPixel::new(30, 200, 10, a), 0, 0);
            assert_eq!(rgb.a, 255);
        }
        let packed = YuvToRgbConverter::ANALOG.packed(YuvPacked444Format::Yuva, RgbChannels::Bgra);
        assert_eq!(packed.invoke([0, 128, 128, 0], 0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_position_independence() {
        let mut rng = rand::rng();
        let converter = YuvToRgbConverter::ANALOG;
        for _ in 0..1000 {
            let px = YuvPixel::new(
                rng.random_range(0..256) as u8,
                rng.random_range(0..256) as u8,
                rng.random_range(0..256) as u8,
                rng.random_range(0..256) as u8,
            );
            let origin = converter.invoke(px, 0, 0);
            let x: u32 = rng.random();
            let y: u32 = rng.random();
            assert_eq!(converter.invoke(px, x, y), origin);
            assert_eq!(converter.invoke(px, u32::MAX, u32::MAX), origin);
        }
    }

    #[test]
    fn test_matches_reference_formula() {
        let mut rng = rand::rng();
        for (bias, narrowing) in ALL_MODES {
            let converter = YuvToRgbConverter::new(YuvStandardMatrix::Analog, bias, narrowing)
                .unwrap();
            for _ in 0..5000 {
                let px = YuvPixel::new(
                    rng.random_range(0..256) as u8,
                    rng.random_range(0..256) as u8,
                    rng.random_range(0..256) as u8,
                    255,
                );
                let rgb = converter.convert(px);
                let expected = reference(px, bias, narrowing);
                let diff = [
                    (rgb.r as i32 - expected[0] as i32).abs(),
                    (rgb.g as i32 - expected[1] as i32).abs(),
                    (rgb.b as i32 - expected[2] as i32).abs(),
                ];
                assert!(
                    diff.iter().all(|&d| d <= 1),
                    "Pixel {:?} converted to {:?}, expected {:?} in mode {:?} {:?}",
                    px,
                    rgb,
                    expected,
                    bias,
                    narrowing
                );
            }
        }
    }

    #[test]
    fn test_bias_modes_agree_on_upper_half() {
        let signed = YuvToRgbConverter::ANALOG;
        let wrapping = YuvToRgbConverter::ANALOG.with_chroma_bias(ChromaBias::Wrapping);
        for u in (128..=255u8).step_by(7) {
            for v in (128..=255u8).step_by(5) {
                for y in (0..=255u8).step_by(17) {
                    let px = YuvPixel::new(y, u, v, 255);
                    assert_eq!(signed.convert(px), wrapping.convert(px));
                }
            }
        }
    }

    #[test]
    fn test_bt601_close_to_analog() {
        let mut rng = rand::rng();
        let bt601 = YuvToRgbConverter::new(
            YuvStandardMatrix::Bt601,
            ChromaBias::Signed,
            Narrowing::Truncate,
        )
        .unwrap();
        for _ in 0..2000 {
            let px = YuvPixel::new(
                rng.random_range(0..256) as u8,
                rng.random_range(0..256) as u8,
                rng.random_range(0..256) as u8,
                255,
            );
            let a = YuvToRgbConverter::ANALOG.convert(px);
            let b = bt601.convert(px);
            assert!((a.r as i32 - b.r as i32).abs() <= 1);
            assert!((a.g as i32 - b.g as i32).abs() <= 1);
            assert!((a.b as i32 - b.b as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_degenerate_matrix_is_rejected() {
        let result = YuvToRgbConverter::new(
            YuvStandardMatrix::Custom(0.7, 0.3),
            ChromaBias::Signed,
            Narrowing::Truncate,
        );
        assert!(matches!(result, Err(YuvError::DegenerateMatrix(_))));
    }

    #[test]
    fn test_packed_layouts() {
        let converter = YuvToRgbConverter::ANALOG;
        let ayuv = converter.packed(YuvPacked444Format::Ayuv, RgbChannels::Rgba);
        assert_eq!(ayuv.invoke([255, 76, 84, 255], 0, 0), [254, 0, 0, 255]);
        let ayuv_bgra = converter.packed(YuvPacked444Format::Ayuv, RgbChannels::Bgra);
        assert_eq!(ayuv_bgra.invoke([255, 76, 84, 255], 0, 0), [0, 0, 254, 255]);
        let yuva = converter.packed(YuvPacked444Format::Yuva, RgbChannels::Rgba);
        assert_eq!(yuva.invoke([76, 84, 255, 0], 3, 9), [254, 0, 0, 255]);
        let vuya = converter.packed(YuvPacked444Format::Vuya, RgbChannels::Rgba);
        assert_eq!(vuya.invoke([255, 84, 76, 0], 0, 0), [254, 0, 0, 255]);
        assert_eq!(vuya.format(), YuvPacked444Format::Vuya);
        assert_eq!(vuya.channels(), RgbChannels::Rgba);
        assert_eq!(*vuya.converter(), converter);
    }

    #[test]
    fn test_registrations() {
        let converter = YuvToRgbConverter::default();
        assert_eq!(converter.registration().to_string(), "yuv-kernel::yuvToRgbPixel@v1");
        let packed = converter.packed(YuvPacked444Format::Yuva, RgbChannels::Rgba);
        assert_eq!(packed.registration().to_string(), "yuv-kernel::yuvToRgb@v1");
        assert_eq!(packed.registration().abi_version, 1);
    }

    #[test]
    fn test_parallel_invocation_matches_sequential() {
        use rayon::prelude::*;

        let width = 64usize;
        let height = 48usize;
        let stride = width * 4;
        let mut rng = rand::rng();
        let src: Vec<u8> = (0..stride * height)
            .map(|_| rng.random_range(0..256) as u8)
            .collect();

        let kernel = YuvToRgbConverter::ANALOG.packed(YuvPacked444Format::Ayuv, RgbChannels::Rgba);

        let mut sequential = vec![0u8; stride * height];
        for (row_y, (src, dst)) in src
            .chunks_exact(stride)
            .zip(sequential.chunks_exact_mut(stride))
            .enumerate()
        {
            for (x, (src, dst)) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)).enumerate() {
                let px = [src[0], src[1], src[2], src[3]];
                dst.copy_from_slice(&kernel.invoke(px, x as u32, row_y as u32));
            }
        }

        let mut parallel = vec![0u8; stride * height];
        parallel
            .par_chunks_exact_mut(stride)
            .zip(src.par_chunks_exact(stride))
            .enumerate()
            .for_each(|(row_y, (dst, src))| {
                for (x, (dst, src)) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)).enumerate() {
                    let px = [src[0], src[1], src[2], src[3]];
                    dst.copy_from_slice(&kernel.invoke(px, x as u32, row_y as u32));
                }
            });

        assert_eq!(sequential, parallel);
        assert!(parallel.chunks_exact(4).all(|px| px[3] == 255));
    }
}
