use anyhow::Result;
use blogwright::cli::{App, Args};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();
    let mut app = App::from_config_path(args.config.clone())?;

    app.run(args).await?;

    Ok(())
}
