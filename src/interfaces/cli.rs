//! Terminal front-end over the site flows.
//!
//! # Usage
//!
//! ```bash
//! # Public settings merged over the defaults, plus the resulting <head>
//! hdmonks settings
//!
//! # Service catalogue for a business type
//! hdmonks stages --business-type existing-business
//!
//! # Send a contact inquiry
//! hdmonks contact --full-name "Asha Rao" --email asha@example.com \
//!     --phone "+91 98765 43210" --message "Need GST registration"
//!
//! # Store an admin token, then edit settings
//! hdmonks login <token>
//! hdmonks admin set smtp_port=465 linkedin=https://linkedin.com/company/hdmonks
//! ```

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::application::services::{
    CataloguePage, ContactForm, IconLookup, SettingsEdit, SettingsEditor, SettingsProvider,
    SettingsTab,
};
use crate::domain::{BusinessType, Settings, SocialPlatform};
use crate::infrastructure::{HeadDocument, StaticIconSet};
use crate::AppHandles;

#[derive(Parser)]
#[command(name = "hdmonks")]
#[command(author, version, about = "HD MONKS site and back-office client")]
pub struct Cli {
    /// Backend origin, overriding HDMONKS_API_BASE_URL and config.json
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Admin bearer token for this invocation instead of the stored one
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the public site settings
    Settings,
    /// List the service catalogue filtered by business type
    Stages {
        /// `startup` or anything else for an existing business
        #[arg(short, long, default_value = "startup")]
        business_type: String,
    },
    /// Submit a contact inquiry
    Contact {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "startup")]
        business_type: String,
    },
    /// Store the admin token
    Login {
        /// Bearer token issued by the backend
        token_value: String,
    },
    /// Forget the stored admin token
    Logout,
    /// Persist the backend origin to config.json
    Configure {
        #[arg(long)]
        api_base_url: String,
    },
    /// Manage the full settings resource
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// Show the current settings
    Show {
        /// Only the fields of one tab (`company`, `smtp`, `social`)
        #[arg(long)]
        tab: Option<String>,
    },
    /// Load, apply `field=value` edits, and save the whole settings object
    Set {
        #[arg(required = true, num_args = 1..)]
        assignments: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = crate::load_config().context("failed to load configuration")?;
    if let Some(base) = cli.api_base_url.clone() {
        config.api_base_url = Some(base.trim_end_matches('/').to_string());
    }
    crate::init_tracing(&config.log_filter);

    if let Commands::Configure { api_base_url } = &cli.command {
        config.api_base_url = Some(api_base_url.trim_end_matches('/').to_string());
        config
            .persist()
            .with_context(|| format!("failed to write {}", config.config_path().display()))?;
        println!("API base set to {}", config.api_base());
        return Ok(());
    }

    config.warn_if_unconfigured();
    let handles = crate::build_environment(config, cli.token.clone())
        .context("failed to bootstrap site client")?;

    match cli.command {
        Commands::Settings => show_public_settings(&handles, cli.json),
        Commands::Stages { business_type } => {
            show_stages(&handles, BusinessType::from_tag(&business_type), cli.json)
        }
        Commands::Contact {
            full_name,
            email,
            phone,
            message,
            business_type,
        } => {
            let mut form = ContactForm::new(
                Arc::clone(&handles.site),
                Arc::clone(&handles.notifier),
                BusinessType::from_tag(&business_type),
            );
            let fields = form.fields_mut();
            fields.full_name = full_name;
            fields.email = email;
            fields.phone = phone;
            fields.message = message;
            form.submit().map_err(|err| anyhow!(err))
        }
        Commands::Login { token_value } => {
            handles
                .token_store
                .store_token(&token_value)
                .map_err(|err| anyhow!(err))?;
            println!("Admin token stored");
            Ok(())
        }
        Commands::Logout => {
            let removed = handles
                .token_store
                .clear_token()
                .map_err(|err| anyhow!(err))?;
            println!(
                "{}",
                if removed {
                    "Admin token removed"
                } else {
                    "No admin token stored"
                }
            );
            Ok(())
        }
        Commands::Configure { .. } => Ok(()),
        Commands::Admin { action } => run_admin(&handles, action, cli.json),
    }
}

fn show_public_settings(handles: &AppHandles, json: bool) -> Result<()> {
    let provider = SettingsProvider::new(Arc::clone(&handles.site));
    let mut document = HeadDocument::default();
    let settings = provider.load(&mut document);
    let head = document.render().context("failed to render document head")?;

    if json {
        #[derive(Serialize)]
        struct Output<'a> {
            settings: &'a crate::domain::SiteSettings,
            head: String,
        }
        print_json(&Output {
            settings: &settings,
            head,
        })?;
        return Ok(());
    }

    println!("{}", settings.company_name);
    println!("  title:       {}", settings.site_title);
    println!("  description: {}", settings.site_description);
    println!("  logo:        {}", settings.company_logo_url);
    println!("  email:       {}", settings.company_email);
    println!("  phone:       {}", settings.company_phone);
    if !settings.company_address.is_empty() {
        println!("  address:     {}", settings.company_address);
    }
    for platform in SocialPlatform::ALL {
        let url = settings.social_links.get(platform);
        if !url.is_empty() {
            println!("  {:<12} {}", format!("{platform}:"), url);
        }
    }
    println!();
    println!("{head}");
    Ok(())
}

fn show_stages(handles: &AppHandles, business_type: BusinessType, json: bool) -> Result<()> {
    let mut page = CataloguePage::new(Arc::clone(&handles.site), Arc::clone(&handles.notifier));
    page.select_business_type(business_type);
    page.load().map_err(|err| anyhow!(err))?;

    if json {
        return print_json(&page.view());
    }

    let icons = StaticIconSet;
    println!(
        "Services for {} (journey progress {}%)",
        page.business_type(),
        page.progress_percentage()
    );
    for (index, stage) in page.visible_stages().iter().enumerate() {
        println!();
        println!("Stage {}: {}", index + 1, stage.title);
        if !stage.subtitle.is_empty() {
            println!("  {}", stage.subtitle);
        }
        if stage.services.is_empty() {
            println!("  (no services for this business type)");
        }
        for service in &stage.services {
            let symbol = icons.symbol(&service.icon).unwrap_or("•");
            println!("  {symbol} {}  [{}]", service.name, service.detail_path());
            if !service.description.is_empty() {
                println!("      {}", service.description);
            }
        }
    }
    Ok(())
}

fn run_admin(handles: &AppHandles, action: AdminAction, json: bool) -> Result<()> {
    let mut editor = SettingsEditor::new(Arc::clone(&handles.admin), Arc::clone(&handles.notifier));

    match action {
        AdminAction::Show { tab } => {
            let tab = tab
                .map(|raw| raw.parse::<SettingsTab>())
                .transpose()
                .map_err(|err| anyhow!(err))?;
            editor.load().map_err(|err| anyhow!(err))?;

            let masked = masked(editor.draft());
            if json {
                return print_json(&masked);
            }
            for shown in SettingsTab::ALL {
                if tab.is_some_and(|selected| selected != shown) {
                    continue;
                }
                editor.select_tab(shown);
                print_tab(&masked, editor.active_tab());
            }
            Ok(())
        }
        AdminAction::Set { assignments } => {
            let edits = assignments
                .iter()
                .map(|assignment| parse_assignment(assignment))
                .collect::<Result<Vec<_>>>()?;

            editor.load().map_err(|err| anyhow!(err))?;
            for edit in edits {
                editor.select_tab(edit.tab());
                editor.edit(edit);
            }
            editor.save().map_err(|err| anyhow!(err))
        }
    }
}

fn parse_assignment(assignment: &str) -> Result<SettingsEdit> {
    let (field, value) = assignment.split_once('=').ok_or_else(|| {
        anyhow!(
            "expected field=value, got '{assignment}' (fields: {})",
            SettingsEdit::FIELDS.join(", ")
        )
    })?;
    SettingsEdit::parse(field, value).map_err(|err| anyhow!(err))
}

fn masked(settings: &Settings) -> Settings {
    let mut copy = settings.clone();
    if !copy.mail.smtp_password.is_empty() {
        copy.mail.smtp_password = "********".into();
    }
    copy
}

fn print_tab(settings: &Settings, tab: SettingsTab) {
    println!("[{}]", tab.label());
    match tab {
        SettingsTab::Company => {
            println!("  company_name    = {}", settings.site.company_name);
            println!("  company_email   = {}", settings.site.company_email);
            println!("  company_phone   = {}", settings.site.company_phone);
            println!("  company_address = {}", settings.site.company_address);
        }
        SettingsTab::Smtp => {
            println!("  smtp_host       = {}", settings.mail.smtp_host);
            println!("  smtp_port       = {}", settings.mail.smtp_port);
            println!("  smtp_user       = {}", settings.mail.smtp_user);
            println!("  smtp_password   = {}", settings.mail.smtp_password);
            println!("  recipient_email = {}", settings.mail.recipient_email);
        }
        SettingsTab::Social => {
            for platform in SocialPlatform::ALL {
                println!(
                    "  {:<15} = {}",
                    platform.as_str(),
                    settings.site.social_links.get(platform)
                );
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
