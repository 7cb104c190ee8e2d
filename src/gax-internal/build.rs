// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::File;
use std::io::Write;
use std::path::Path;

// Records the compiler version for the `x-elastic-client-meta` and
// `User-Agent` headers.
fn main() {
    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not specified");
    let rustc = rustc_version::version().expect("Could not retrieve rustc version");
    let contents = format!(
        "pub(crate) const RUSTC_VERSION: &str = \"{}.{}.{}\";\n",
        rustc.major, rustc.minor, rustc.patch
    );
    let mut f = File::create(Path::new(&out_dir).join("build_env.rs"))
        .expect("Could not create build environment");
    f.write_all(contents.as_bytes())
        .expect("Unable to write rust version");
    f.flush().expect("failed to flush");
    println!("cargo::rerun-if-changed=build.rs");
}
