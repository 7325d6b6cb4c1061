use std::process::ExitCode;

use spfy_mode::clients::errors::Error;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    match cli::run().await {
        Ok(code) => code,
        Err(e @ Error::MissingToken { .. }) => {
            println!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
