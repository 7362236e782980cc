use anyhow::Result;
use reel_core::mutate::allowed_genres;

use crate::config::OutputFormat;

pub fn list_genres(output: OutputFormat) -> Result<()> {
    let genres = allowed_genres();

    match output {
        OutputFormat::Text => {
            for genre in genres {
                println!("{}", genre);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&genres)?),
    }

    Ok(())
}
