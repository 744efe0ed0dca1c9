// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Split a JSON Bible translation into per-book files.
//!
//! This program reads a JSON array of books (each with a `name`, an
//! `abbrev` and its `chapters` of verses) and writes every book to
//! `content/bible/<version_id>/<slug>.json`. The version and a summary
//! of its books are then inserted into, or replaced in, the catalog at
//! `content/bible/versions.json`.
//!
//! Set `RUST_LOG=info` to see each file as it is written.

use std::path::Path;

use anyhow::Context;
use bible_structure::{structure_bible, ContentLayout};

const USAGE: &str = "Usage: structure-bible <input_json> <version_id> <version_name>";

/// Picks the input path, version id and version name out of the command
/// line. Arguments after the third are ignored.
fn parse_args(args: &[String]) -> Option<(&str, &str, &str)> {
    match args {
        [_, input, version_id, version_name, ..] => {
            Some((input.as_str(), version_id.as_str(), version_name.as_str()))
        }
        _ => None,
    }
}

#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "warn"));

    let args = std::env::args().collect::<Vec<_>>();
    let Some((input, version_id, version_name)) = parse_args(&args) else {
        println!("{USAGE}");
        return Ok(());
    };

    structure_bible(
        &ContentLayout::default(),
        Path::new(input),
        version_id,
        version_name,
    )
    .with_context(|| format!("Could not structure {version_name} ({version_id}) from {input}"))?;

    println!("Successfully structured {version_name} ({version_id})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|&arg| arg.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let all = args(&["structure-bible", "kjv.json", "kjv", "King James Version"]);
        assert_eq!(
            parse_args(&all),
            Some(("kjv.json", "kjv", "King James Version"))
        );

        let extra = args(&["structure-bible", "kjv.json", "kjv", "KJV", "ignored"]);
        assert_eq!(parse_args(&extra), Some(("kjv.json", "kjv", "KJV")));
    }

    #[test]
    fn test_parse_args_too_few() {
        assert_eq!(parse_args(&args(&[])), None);
        assert_eq!(parse_args(&args(&["structure-bible"])), None);
        assert_eq!(parse_args(&args(&["structure-bible", "kjv.json", "kjv"])), None);
    }
}
