use std::path::PathBuf;

use company_dashboard::{
    config::DashboardConfig,
    datasources::FirestoreDatasource,
    entities::{DocumentId, ViewMode},
    util::CompanyDashboardUtil,
};
use fractic_server_error::ServerError;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "company-dashboard",
    about = "Browse and edit company records in the dashboard's document store"
)]
enum Command {
    /// List companies in display order
    List,
    /// Show the detail view of a company (the default selection if omitted)
    Show {
        /// Company id or display name
        #[structopt(long)]
        company: Option<String>,
        /// Period to show: actual or previous
        #[structopt(long, default_value = "actual")]
        mode: ViewMode,
    },
    /// Print the flat form fields, blank or for an existing company
    Form { id: Option<String> },
    /// Create a company from form fields
    Add {
        /// Form field assignment, e.g. --set companyCommonName=Airbus
        #[structopt(long = "set", parse(try_from_str = parse_assignment))]
        fields: Vec<(String, String)>,
    },
    /// Update a company's form fields
    Edit {
        id: String,
        #[structopt(long = "set", parse(try_from_str = parse_assignment))]
        fields: Vec<(String, String)>,
    },
    /// Delete a company
    Delete { id: String },
    /// Create a company from a JSON file
    Import {
        #[structopt(parse(from_os_str))]
        file: PathBuf,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

async fn run(
    dashboard: &CompanyDashboardUtil<FirestoreDatasource>,
    command: Command,
) -> Result<(), ServerError> {
    match command {
        Command::List => {
            dashboard.load().await?;
            print!("{}", dashboard.render_sidebar());
        }
        Command::Show { company, mode } => {
            dashboard.load().await?;
            if let Some(key) = company {
                dashboard.select_by_name_or_id(&key)?;
            }
            dashboard.set_view_mode(mode)?;
            print!("{}", dashboard.render_current());
        }
        Command::Form { id } => {
            let form = match id {
                Some(id) => {
                    dashboard.load().await?;
                    dashboard.edit_form(&DocumentId(id))?
                }
                None => dashboard.new_form(),
            };
            for (key, value) in form.entries() {
                println!("{}={}", key, value);
            }
        }
        Command::Add { fields } => {
            let mut form = dashboard.new_form();
            for (key, value) in &fields {
                form.set(key, value)?;
            }
            let created = dashboard.submit_new(&form).await?;
            println!("Created {} ({})", created.display_name(), created.id);
        }
        Command::Edit { id, fields } => {
            dashboard.load().await?;
            let id = DocumentId(id);
            let mut form = dashboard.edit_form(&id)?;
            for (key, value) in &fields {
                form.set(key, value)?;
            }
            let updated = dashboard.submit_edit(&id, &form).await?;
            println!("Updated {} ({})", updated.display_name(), updated.id);
        }
        Command::Delete { id } => {
            let deleted = dashboard.delete(&DocumentId(id)).await?;
            println!("Deleted {}", deleted);
        }
        Command::Import { file } => {
            let created = dashboard.import_file(&file).await?;
            println!("Imported {} ({})", created.display_name(), created.id);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let command = Command::from_args();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let dashboard = CompanyDashboardUtil::from_config(&config);

    if let Err(e) = run(&dashboard, command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
