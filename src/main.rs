use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    s3_console_lib::run().await
}
