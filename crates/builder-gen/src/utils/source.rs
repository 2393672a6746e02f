use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

pub struct SourceLoader {
  file: AsyncMmapFile,
}

impl SourceLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<syn::File> {
    let content = std::str::from_utf8(self.file.as_slice())?;
    Ok(syn::parse_file(content)?)
  }
}
