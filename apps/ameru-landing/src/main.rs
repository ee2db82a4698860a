use anyhow::Result;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();
    ameru_landing::runner::run()
}
