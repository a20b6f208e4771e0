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
use std::fmt::{Display, Formatter};

/// Identity a host toolchain uses to locate and link a kernel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct KernelRegistration {
    /// Kernel entry point name
    pub name: &'static str,
    /// Namespace the kernel is published under
    pub package: &'static str,
    /// Bumped whenever the call signature or pixel layout changes
    pub abi_version: u32,
}

impl KernelRegistration {
    pub const fn new(name: &'static str, abi_version: u32) -> KernelRegistration {
        KernelRegistration {
            name,
            package: env!("CARGO_PKG_NAME"),
            abi_version,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.package, self.name)
    }
}

impl Display for KernelRegistration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}::{}@v{}",
            self.package, self.name, self.abi_version
        ))
    }
}

/// Uniform per-pixel call signature.
///
/// The host invokes a kernel once per pixel coordinate, in any order and from
/// any number of threads. Kernels that do not depend on position simply ignore
/// `x` and `y`.
pub trait PixelKernel: Send + Sync {
    type Input: Copy;
    type Output: Copy;

    fn registration(&self) -> KernelRegistration;

    fn invoke(&self, input: Self::Input, x: u32, y: u32) -> Self::Output;
}
