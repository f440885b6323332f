//! Serve command - run the import/inference HTTP API.

use colored::Colorize;

use crate::server::app;

pub fn run(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Starting import service at".cyan().bold(),
        format!("http://localhost:{}", port).white().bold()
    );
    println!();
    println!("  POST /api/import/preview");
    println!("  POST /api/extract/rows");
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        if let Err(e) = app::run_server(port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
