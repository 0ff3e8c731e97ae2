use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "canvas-server", about = "Shared drawing session over WebSocket")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "CANVAS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}
