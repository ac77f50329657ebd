// Command-line front end for the job board

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use jobboard_client::{
    report, Company, FileSessionStore, Job, JobBoardClient, NewJob, Notifier, Session,
    SignupRequest, TerminalNotifier, DEFAULT_API_URL,
};

/// Number of jobs on the home view
const RECENT_JOBS: u32 = 3;

const JOB_TYPES: &[&str] = &["Full-Time", "Part-Time", "Remote", "Internship"];
const GENDERS: &[&str] = &["male", "female", "other"];
const MEMBERSHIPS: &[&str] = &["bronze", "silver", "gold", "platinum"];

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Browse, add, edit and delete job listings")]
struct Cli {
    /// Base URL of the job board API
    #[arg(long, env = "JOBBOARD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Where the login session is kept
    #[arg(long, env = "JOBBOARD_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the most recent jobs (default)
    Home,

    /// Create an account
    Signup,

    /// Log in to an existing account
    Login {
        #[arg(long)]
        email: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Browse jobs
    List {
        /// Show only the N newest jobs
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one job in full
    Show { id: String },

    /// Add a job listing
    Add,

    /// Edit a job listing
    Edit { id: String },

    /// Delete a job listing
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Composition root: the session provider is chosen here and handed down
    let session_path = cli
        .session_file
        .unwrap_or_else(FileSessionStore::default_path);
    let sessions = Arc::new(FileSessionStore::new(session_path));
    let app = App {
        client: JobBoardClient::new(cli.api_url, sessions),
        notifier: TerminalNotifier,
        theme: ColorfulTheme::default(),
    };

    match cli.command.unwrap_or(Commands::Home) {
        Commands::Home => app.home().await,
        Commands::Signup => app.signup().await,
        Commands::Login { email } => app.login(email).await,
        Commands::Logout => app.logout(),
        Commands::List { limit } => app.list(limit).await,
        Commands::Show { id } => app.show(&id).await,
        Commands::Add => app.add().await,
        Commands::Edit { id } => app.edit(&id).await,
        Commands::Delete { id, yes } => app.delete(&id, yes).await,
    }
}

struct App {
    client: JobBoardClient,
    notifier: TerminalNotifier,
    theme: ColorfulTheme,
}

impl App {
    // =========================================================================
    // Route guard
    // =========================================================================

    /// The stored session, or an interactive login when there is none
    async fn ensure_session(&self) -> Result<Option<Session>> {
        match self.client.session() {
            Ok(Some(session)) => return Ok(Some(session)),
            Ok(None) => self.notifier.error("Please log in to continue"),
            Err(e) => self.notifier.error(&e.to_string()),
        }
        self.login_prompt(None).await
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    async fn signup(&self) -> Result<()> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Name")
            .interact_text()?;
        let phone_number: String = Input::with_theme(&self.theme)
            .with_prompt("Phone number")
            .interact_text()?;
        let gender = self.select("Gender", GENDERS)?;
        let date_of_birth: String = Input::with_theme(&self.theme)
            .with_prompt("Date of birth (YYYY-MM-DD)")
            .interact_text()?;
        let membership_status = self.select("Membership status", MEMBERSHIPS)?;
        let email: String = Input::with_theme(&self.theme)
            .with_prompt("Email")
            .interact_text()?;
        let password = Password::with_theme(&self.theme)
            .with_prompt("Password")
            .interact()?;
        let confirm_password = Password::with_theme(&self.theme)
            .with_prompt("Confirm password")
            .interact()?;

        if password != confirm_password {
            self.notifier.error("Passwords do not match");
            return Ok(());
        }

        let request = SignupRequest {
            name,
            email,
            password,
            phone_number,
            gender,
            date_of_birth,
            membership_status,
        };
        let result = self.client.signup(&request).await;
        if report(&self.notifier, result, "Signup Successful").is_some() {
            self.home().await?;
        }
        Ok(())
    }

    async fn login(&self, email: Option<String>) -> Result<()> {
        if self.login_prompt(email).await?.is_some() {
            self.home().await?;
        }
        Ok(())
    }

    async fn login_prompt(&self, email: Option<String>) -> Result<Option<Session>> {
        let email = match email {
            Some(email) => email,
            None => Input::with_theme(&self.theme)
                .with_prompt("Email")
                .interact_text()?,
        };
        let password = Password::with_theme(&self.theme)
            .with_prompt("Password")
            .interact()?;

        let result = self.client.login(&email, &password).await;
        Ok(report(&self.notifier, result, "Login Successful"))
    }

    fn logout(&self) -> Result<()> {
        report(&self.notifier, self.client.logout(), "Logged out");
        Ok(())
    }

    // =========================================================================
    // Jobs
    // =========================================================================

    async fn home(&self) -> Result<()> {
        if self.ensure_session().await?.is_none() {
            return Ok(());
        }
        println!("{}", "Recent Jobs".bold().bright_blue());
        self.print_jobs(Some(RECENT_JOBS)).await;
        Ok(())
    }

    async fn list(&self, limit: Option<u32>) -> Result<()> {
        if self.ensure_session().await?.is_none() {
            return Ok(());
        }
        println!("{}", "Browse Jobs".bold().bright_blue());
        self.print_jobs(limit).await;
        Ok(())
    }

    async fn print_jobs(&self, limit: Option<u32>) {
        match self.client.list_jobs(limit).await {
            Ok(jobs) if jobs.is_empty() => println!("No jobs available at the moment."),
            Ok(jobs) => {
                for job in &jobs {
                    print_summary(job);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching jobs");
                self.notifier.error(&e.to_string());
            }
        }
    }

    async fn show(&self, id: &str) -> Result<()> {
        if self.ensure_session().await?.is_none() {
            return Ok(());
        }
        match self.client.get_job(id).await {
            Ok(job) => print_detail(&job),
            Err(e) => {
                tracing::error!(error = %e, id, "Error fetching job");
                self.notifier.error(&e.to_string());
            }
        }
        Ok(())
    }

    async fn add(&self) -> Result<()> {
        if self.ensure_session().await?.is_none() {
            return Ok(());
        }
        let job = self.job_form(None)?;

        let result = self.client.create_job(&job).await;
        if let Some(job) = report(&self.notifier, result, "Job Added Successfully") {
            print_detail(&job);
        }
        Ok(())
    }

    async fn edit(&self, id: &str) -> Result<()> {
        if self.ensure_session().await?.is_none() {
            return Ok(());
        }
        let current = match self.client.get_job(id).await {
            Ok(job) => job,
            Err(e) => {
                tracing::error!(error = %e, id, "Error fetching job");
                self.notifier.error(&e.to_string());
                return Ok(());
            }
        };
        let job = self.job_form(Some(NewJob::from(current)))?;

        let result = self.client.update_job(id, &job).await;
        if let Some(job) = report(&self.notifier, result, "Job Updated Successfully") {
            print_detail(&job);
        }
        Ok(())
    }

    async fn delete(&self, id: &str, yes: bool) -> Result<()> {
        if self.ensure_session().await?.is_none() {
            return Ok(());
        }
        let confirmed = yes
            || Confirm::with_theme(&self.theme)
                .with_prompt("Are you sure you want to delete this listing?")
                .default(false)
                .interact()?;
        if !confirmed {
            return Ok(());
        }

        let result = self.client.delete_job(id).await;
        report(&self.notifier, result, "Job Deleted Successfully");
        Ok(())
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    fn select(&self, prompt: &str, options: &[&str]) -> Result<String> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()?;
        Ok(options[index].to_string())
    }

    fn text(&self, prompt: &str, current: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(current) = current {
            input = input.default(current.to_string());
        }
        Ok(input.interact_text()?)
    }

    /// Add/edit form; `current` pre-fills every field
    fn job_form(&self, current: Option<NewJob>) -> Result<NewJob> {
        let current = current.as_ref();

        let title = self.text("Job listing name", current.map(|j| j.title.as_str()))?;
        let default_type = current
            .and_then(|j| JOB_TYPES.iter().position(|t| *t == j.job_type))
            .unwrap_or(0);
        let type_index = Select::with_theme(&self.theme)
            .with_prompt("Job type")
            .items(JOB_TYPES)
            .default(default_type)
            .interact()?;
        let description = self.text("Description", current.map(|j| j.description.as_str()))?;
        let salary = self.text("Salary", current.map(|j| j.salary.as_str()))?;
        let location = self.text("Location", current.map(|j| j.location.as_str()))?;

        let company = current.map(|j| &j.company);
        let company = Company {
            name: self.text("Company name", company.map(|c| c.name.as_str()))?,
            description: self.text(
                "Company description",
                company.map(|c| c.description.as_str()),
            )?,
            contact_email: self.text("Contact email", company.map(|c| c.contact_email.as_str()))?,
            contact_phone: self.text("Contact phone", company.map(|c| c.contact_phone.as_str()))?,
        };

        Ok(NewJob {
            title,
            job_type: JOB_TYPES[type_index].to_string(),
            location,
            description,
            salary,
            company,
        })
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn print_summary(job: &Job) {
    println!();
    println!("{}  {}", job.title.bold(), format!("[{}]", job.job_type).dimmed());
    println!("  {}  {}", job.location.cyan(), job.salary.green());
    println!("  {}", first_line(&job.description, 90));
    println!("  {}", format!("id: {}", job.id).dimmed());
}

fn print_detail(job: &Job) {
    println!();
    println!("{}", job.title.bold().bright_white());
    println!("{} {}", "Type:".dimmed(), job.job_type);
    println!("{} {}", "Location:".dimmed(), job.location.cyan());
    println!("{} {}", "Salary:".dimmed(), job.salary.green());
    println!();
    println!("{}", job.description);
    println!();
    println!("{}", "Company Info".bold());
    println!("  {}", job.company.name);
    println!("  {}", job.company.description);
    println!("  {} {}", "Contact email:".dimmed(), job.company.contact_email);
    println!("  {} {}", "Contact phone:".dimmed(), job.company.contact_phone);
    println!("{}", format!("id: {}", job.id).dimmed());
}

/// First line of `text`, cut to `max` characters
fn first_line(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > max {
        let cut: String = line.chars().take(max).collect();
        format!("{cut}…")
    } else {
        line.to_string()
    }
}
