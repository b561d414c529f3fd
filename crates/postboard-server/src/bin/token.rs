use clap::Parser;
use postboard_server::auth::create_access_token;
use uuid::Uuid;

/// Mint an access token for local testing against a running server.
#[derive(Parser)]
#[command(name = "postboard-token", version)]
struct Cli {
    /// Id of the user the token authenticates as.
    #[arg(long)]
    user: Uuid,
    /// Must match the server's secret.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    secret: String,
    /// Lifetime in seconds.
    #[arg(long, default_value_t = 3600)]
    expires_in: i64,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let token = create_access_token(cli.user, &cli.secret, cli.expires_in)?;
    println!("{}", token);

    Ok(())
}
