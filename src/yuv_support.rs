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
use crate::YuvError;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
/// Chroma part of the YUV to RGB transform, luma is always taken as is.
pub struct CbCrInverseTransform<T> {
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

impl<T> CbCrInverseTransform<T> {
    pub const fn new(cr_coef: T, cb_coef: T, g_coeff_1: T, g_coeff_2: T) -> CbCrInverseTransform<T> {
        CbCrInverseTransform {
            cr_coef,
            cb_coef,
            g_coeff_1,
            g_coeff_2,
        }
    }
}

impl CbCrInverseTransform<f32> {
    /// Analog BT.601 constants as they are usually quoted for 8-bit full range:
    ///
    /// ```text
    /// R = Y + 1.402 * V
    /// G = Y - 0.344 * U - 0.714 * V
    /// B = Y + 1.772 * U
    /// ```
    pub const ANALOG: CbCrInverseTransform<f32> =
        CbCrInverseTransform::new(1.402f32, 1.772f32, 0.714f32, 0.344f32);

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cr_coef.is_finite()
            && self.cb_coef.is_finite()
            && self.g_coeff_1.is_finite()
            && self.g_coeff_2.is_finite()
    }
}

/// Full range transformation YUV to RGB with coefficients as specified in [ITU-R](https://www.itu.int/rec/T-REC-H.273/en)
pub fn get_inverse_transform(kr: f32, kb: f32) -> Result<CbCrInverseTransform<f32>, YuvError> {
    let kg = 1.0f32 - kr - kb;
    if kg == 0f32 {
        return Err(YuvError::DegenerateMatrix(YuvBias { kr, kb }));
    }
    let cr_coeff = 2f32 * (1f32 - kr);
    let cb_coeff = 2f32 * (1f32 - kb);
    let g_coeff_1 = 2f32 * ((1f32 - kr) * kr / kg);
    let g_coeff_2 = 2f32 * ((1f32 - kb) * kb / kg);
    let transform = CbCrInverseTransform::new(cr_coeff, cb_coeff, g_coeff_1, g_coeff_2);
    if !transform.is_finite() {
        return Err(YuvError::DegenerateMatrix(YuvBias { kr, kb }));
    }
    Ok(transform)
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct YuvBias {
    pub kr: f32,
    pub kb: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
/// Declares the conversion matrix, check [ITU-R](https://www.itu.int/rec/T-REC-H.273/en) information for more info
pub enum YuvStandardMatrix {
    /// Rounded analog BT.601 constants, see [CbCrInverseTransform::ANALOG]
    #[default]
    Analog,
    Bt601,
    Bt709,
    Bt2020,
    Smpte240,
    Bt470_6,
    /// Custom parameters first goes for kr, second for kb.
    Custom(f32, f32),
}

impl YuvStandardMatrix {
    /// Returns `None` for [YuvStandardMatrix::Analog], its constants are fixed
    pub const fn get_kr_kb(&self) -> Option<YuvBias> {
        match self {
            YuvStandardMatrix::Analog => None,
            YuvStandardMatrix::Bt601 => Some(YuvBias {
                kr: 0.299f32,
                kb: 0.114f32,
            }),
            YuvStandardMatrix::Bt709 => Some(YuvBias {
                kr: 0.2126f32,
                kb: 0.0722f32,
            }),
            YuvStandardMatrix::Bt2020 => Some(YuvBias {
                kr: 0.2627f32,
                kb: 0.0593f32,
            }),
            YuvStandardMatrix::Smpte240 => Some(YuvBias {
                kr: 0.087f32,
                kb: 0.212f32,
            }),
            YuvStandardMatrix::Bt470_6 => Some(YuvBias {
                kr: 0.2220f32,
                kb: 0.0713f32,
            }),
            YuvStandardMatrix::Custom(kr, kb) => Some(YuvBias { kr: *kr, kb: *kb }),
        }
    }

    pub fn inverse_transform(&self) -> Result<CbCrInverseTransform<f32>, YuvError> {
        match self.get_kr_kb() {
            None => Ok(CbCrInverseTransform::ANALOG),
            Some(bias) => get_inverse_transform(bias.kr, bias.kb),
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
/// How chroma bias of 128 is removed from U and V.
pub enum ChromaBias {
    /// `u - 128` in signed arithmetic, chroma lands in [-128, 127]
    #[default]
    Signed = 0,
    /// `u - 128` in 8-bit unsigned arithmetic, values below 128 wrap to `u + 128`.
    /// Matches legacy kernels that subtract the bias before widening.
    Wrapping = 1,
}

impl ChromaBias {
    #[inline(always)]
    pub fn apply(&self, value: u8) -> f32 {
        match self {
            ChromaBias::Signed => value as f32 - 128f32,
            ChromaBias::Wrapping => value.wrapping_sub(128) as f32,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
/// Float to integer conversion, always applied after clamping.
pub enum Narrowing {
    /// Truncate toward zero
    #[default]
    Truncate = 0,
    /// Round half away from zero
    RoundNearest = 1,
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
/// Byte order of a packed 4:4:4 YUV sample
pub enum YuvPacked444Format {
    #[default]
    Yuva = 0,
    Ayuv = 1,
    Vuya = 2,
}

impl From<u8> for YuvPacked444Format {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvPacked444Format::Yuva,
            1 => YuvPacked444Format::Ayuv,
            2 => YuvPacked444Format::Vuya,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl YuvPacked444Format {
    #[inline(always)]
    pub const fn get_y_ps(&self) -> usize {
        match self {
            YuvPacked444Format::Yuva => 0,
            YuvPacked444Format::Ayuv => 1,
            YuvPacked444Format::Vuya => 2,
        }
    }

    #[inline(always)]
    pub const fn get_u_ps(&self) -> usize {
        match self {
            YuvPacked444Format::Yuva => 1,
            YuvPacked444Format::Ayuv => 2,
            YuvPacked444Format::Vuya => 1,
        }
    }

    #[inline(always)]
    pub const fn get_v_ps(&self) -> usize {
        match self {
            YuvPacked444Format::Yuva => 2,
            YuvPacked444Format::Ayuv => 3,
            YuvPacked444Format::Vuya => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_ps(&self) -> usize {
        match self {
            YuvPacked444Format::Yuva => 3,
            YuvPacked444Format::Ayuv => 0,
            YuvPacked444Format::Vuya => 3,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
/// Byte order of a packed RGB destination sample
pub enum RgbChannels {
    #[default]
    Rgba = 0,
    Bgra = 1,
}

impl From<u8> for RgbChannels {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => RgbChannels::Rgba,
            1 => RgbChannels::Bgra,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl RgbChannels {
    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            RgbChannels::Rgba => 0,
            RgbChannels::Bgra => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            RgbChannels::Rgba => 2,
            RgbChannels::Bgra => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        3
    }
}
