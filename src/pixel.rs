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
use crate::yuv_error::check_packed_pixel;
use crate::yuv_support::{RgbChannels, YuvPacked444Format};
use crate::YuvError;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// One 8-bit YUV sample, alpha is carried along but never used by the conversion
pub struct YuvPixel {
    pub y: u8,
    pub u: u8,
    pub v: u8,
    pub a: u8,
}

impl YuvPixel {
    pub const fn new(y: u8, u: u8, v: u8, a: u8) -> YuvPixel {
        YuvPixel { y, u, v, a }
    }

    #[inline(always)]
    pub const fn from_packed(packed: [u8; 4], format: YuvPacked444Format) -> YuvPixel {
        YuvPixel {
            y: packed[format.get_y_ps()],
            u: packed[format.get_u_ps()],
            v: packed[format.get_v_ps()],
            a: packed[format.get_a_ps()],
        }
    }

    #[inline(always)]
    pub fn to_packed(&self, format: YuvPacked444Format) -> [u8; 4] {
        let mut packed = [0u8; 4];
        packed[format.get_y_ps()] = self.y;
        packed[format.get_u_ps()] = self.u;
        packed[format.get_v_ps()] = self.v;
        packed[format.get_a_ps()] = self.a;
        packed
    }
}

impl From<[u8; 4]> for YuvPixel {
    /// Bytes are expected in Y, U, V, A order
    #[inline(always)]
    fn from(value: [u8; 4]) -> Self {
        YuvPixel::from_packed(value, YuvPacked444Format::Yuva)
    }
}

impl TryFrom<&[u8]> for YuvPixel {
    type Error = YuvError;

    /// Bytes are expected in Y, U, V, A order
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        check_packed_pixel(value)?;
        Ok(YuvPixel::new(value[0], value[1], value[2], value[3]))
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct RgbaPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaPixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> RgbaPixel {
        RgbaPixel { r, g, b, a }
    }

    #[inline(always)]
    pub fn to_packed(&self, channels: RgbChannels) -> [u8; 4] {
        let mut packed = [0u8; 4];
        packed[channels.get_r_channel_offset()] = self.r;
        packed[channels.get_g_channel_offset()] = self.g;
        packed[channels.get_b_channel_offset()] = self.b;
        packed[channels.get_a_channel_offset()] = self.a;
        packed
    }
}

impl From<RgbaPixel> for [u8; 4] {
    #[inline(always)]
    fn from(value: RgbaPixel) -> Self {
        value.to_packed(RgbChannels::Rgba)
    }
}
