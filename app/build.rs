/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fs;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate_to;
use clap_complete::Shell::{Bash, Elvish, Fish, PowerShell, Zsh};
use clap_mangen::Man;

include!("src/cli.rs");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=HTML_BEAUTIFIER_ASSETS");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let completions = out_dir.join("completions");
    let man = out_dir.join("man");
    fs::create_dir_all(&completions)?;
    fs::create_dir_all(&man)?;

    let mut command = Cli::command();
    for shell in [Bash, Elvish, Fish, PowerShell, Zsh] {
        generate_to(shell, &mut command, "html-beautifier", &completions)?;
    }

    let mut page = Vec::new();
    Man::new(Cli::command()).render(&mut page)?;
    fs::write(man.join("html-beautifier.1"), page)?;

    // Packagers can ask for the generated assets next to the build.
    if let Ok(assets) = std::env::var("HTML_BEAUTIFIER_ASSETS") {
        fs::create_dir_all(&assets)?;
        let options = fs_extra::dir::CopyOptions::new().overwrite(true);
        fs_extra::dir::copy(&completions, &assets, &options)?;
        fs_extra::dir::copy(&man, &assets, &options)?;
    }

    Ok(())
}
