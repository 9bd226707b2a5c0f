use async_graphql::{Request, Variables};
use clap::{Parser, Subcommand};
use edtech::graph::build_schema;
use edtech::model::ModelManager;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for poking at the edtech GraphQL schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the schema in SDL
    Sdl,

    /// Run operations in order against one fresh, seeded store
    Exec {
        /// Operation text, repeat to run several against the same store
        #[arg(short, long = "query", required = true)]
        queries: Vec<String>,
        /// JSON object with variables, shared by every operation
        #[arg(long)]
        variables: Option<String>,
    },
}

#[tokio::main]
async fn main() -> edtech::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let schema = build_schema(ModelManager::seeded());

    match args.command {
        Commands::Sdl => {
            println!("{}", schema.sdl());
        }

        Commands::Exec { queries, variables } => {
            let variables = match variables {
                Some(raw) => Variables::from_json(serde_json::from_str(&raw)?),
                None => Variables::default(),
            };

            for query in queries {
                let request = Request::new(query).variables(variables.clone());
                let response = schema.execute(request).await;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}
