use crate::config::{InputFile, PipelineConfig, SourceConfig};
use anyhow::{Context, Result};
use futures::future::join_all;
use std::{path::Path, time::Duration};
use tracing::{info, warn};

const FETCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Download the inputs of every enabled source whose location is missing
/// from `<mirror>/<source>/<file>`. Files the mirror does not have are skipped.
pub async fn fetch_missing(config: &PipelineConfig, mirror: &str) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    for source in &config.sources {
        let (Some(location), Some(dir)) = (source.location(), source.download_dir()) else {
            continue;
        };
        if location.exists() {
            continue;
        }
        info!(source = %source.id, mirror, "Fetching missing source");
        let inputs = source.inputs().iter().filter(|input| input.path.parent() == Some(dir));
        let results = join_all(inputs.map(|input| fetch_input(&client, mirror, source, dir, input))).await;

        let mut fetched = 0usize;
        for result in results {
            if result? {
                fetched += 1;
            }
        }
        info!(source = %source.id, fetched, "Fetch finished");
    }
    Ok(())
}

pub fn mirror_url(mirror: &str, source: &SourceConfig, input: &InputFile) -> String {
    format!("{}/{}/{}", mirror.trim_end_matches('/'), source.id, input.file_name())
}

async fn fetch_input(
    client: &reqwest::Client,
    mirror: &str,
    source: &SourceConfig,
    dir: &Path,
    input: &InputFile,
) -> Result<bool> {
    let url = mirror_url(mirror, source, input);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to request {url}"))?;
    if !response.status().is_success() {
        warn!(url = %url, status = %response.status(), "Mirror does not have file, skipping");
        return Ok(false);
    }
    let body = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read response body from {url}"))?;

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(input.file_name());
    tokio::fs::write(&path, &body)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceId;
    use std::collections::HashMap;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    // Serves `files` by request path; everything else is a 404.
    async fn serve(files: HashMap<&'static str, &'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let files = files.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let mut read = 0;
                    loop {
                        let n = stream.read(&mut buf[read..]).await.unwrap();
                        read += n;
                        if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    let request = String::from_utf8_lossy(&buf[..read]);
                    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let response = match files.get(path.as_str()) {
                        Some(body) => format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                            body.len()
                        ),
                        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
                    };
                    stream.write_all(response.as_bytes()).await.unwrap();
                    let _ = stream.shutdown().await;
                });
            }
        });
        format!("http://{addr}")
    }

    #[test]
    fn builds_mirror_urls() {
        let source = SourceConfig::with_defaults(SourceId::Wordnet, Path::new("data"));
        assert_eq!(
            mirror_url("https://mirror.test/corpora/", &source, &source.inputs()[0]),
            "https://mirror.test/corpora/wordnet/data.noun"
        );

        let moby = SourceConfig::with_defaults(SourceId::Moby, Path::new("data"));
        assert_eq!(
            mirror_url("https://mirror.test", &moby, &moby.inputs()[0]),
            "https://mirror.test/moby/mthesaur.txt"
        );
    }

    #[tokio::test]
    async fn fetches_only_what_the_mirror_has() {
        let mirror = serve(HashMap::from([("/wordnet/data.noun", "01324142 05 n 01 puppy 0 000 | a young dog\n")])).await;
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::new(dir.path().join("words.txt")).enable(SourceId::Wordnet, dir.path());

        fetch_missing(&config, &mirror).await.unwrap();

        let wordnet = dir.path().join("wordnet");
        assert_eq!(
            std::fs::read_to_string(wordnet.join("data.noun")).unwrap(),
            "01324142 05 n 01 puppy 0 000 | a young dog\n"
        );
        assert!(!wordnet.join("data.verb").exists());
        assert!(!wordnet.join("data.adj").exists());
    }

    #[tokio::test]
    async fn nothing_created_when_mirror_lacks_the_source() {
        let mirror = serve(HashMap::new()).await;
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::new(dir.path().join("words.txt")).enable(SourceId::Moby, dir.path());

        fetch_missing(&config, &mirror).await.unwrap();
        assert!(!dir.path().join("moby").exists());
    }

    #[tokio::test]
    async fn present_sources_are_left_alone() {
        let mirror = serve(HashMap::from([("/scowl/english-words.10", "remote\n")])).await;
        let dir = tempfile::tempdir().unwrap();
        let scowl = dir.path().join("scowl").join("final");
        std::fs::create_dir_all(&scowl).unwrap();
        let config = PipelineConfig::new(dir.path().join("words.txt")).enable(SourceId::Scowl, dir.path());

        fetch_missing(&config, &mirror).await.unwrap();
        assert!(!scowl.join("english-words.10").exists());
    }
}
