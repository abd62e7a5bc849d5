//! Menu loop mapping the form actions onto the editor and exporter.

use std::path::PathBuf;

use chrono::Local;
use dialoguer::theme::ColorfulTheme;

use crate::cli::{io, output, CliError};
use crate::config::{Config, ConfigManager};
use crate::editor::BudgetEditor;
use crate::export;

const MENU: &[&str] = &[
    "Add service",
    "Edit service",
    "Remove service",
    "Show draft",
    "Finalize budget",
    "List budgets",
    "Edit budget",
    "Remove budget",
    "Export PDF",
    "Settings",
    "Quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub struct Shell {
    theme: ColorfulTheme,
    editor: BudgetEditor,
    config: Config,
    config_manager: ConfigManager,
}

impl Shell {
    pub fn new(config: Config, config_manager: ConfigManager) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            editor: BudgetEditor::new(),
            config,
            config_manager,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        output::section("Big Refrigeração - Orçamentos");
        let items: Vec<String> = MENU.iter().map(|item| item.to_string()).collect();
        loop {
            let choice = io::select_index(&self.theme, "Action", &items)?;
            let control = match choice {
                0 => self.add_service()?,
                1 => self.edit_service()?,
                2 => self.remove_service()?,
                3 => self.show_draft(),
                4 => self.finalize_budget()?,
                5 => self.list_budgets(),
                6 => self.edit_budget()?,
                7 => self.remove_budget()?,
                8 => self.export()?,
                9 => self.settings()?,
                _ => LoopControl::Exit,
            };
            if control == LoopControl::Exit {
                break;
            }
        }
        Ok(())
    }

    fn add_service(&mut self) -> Result<LoopControl, CliError> {
        let name = io::prompt_text(&self.theme, "Service name", self.editor.service_name())?;
        let amount = io::prompt_text(
            &self.theme,
            "Amount (blank for fixed-price services)",
            self.editor.amount_input(),
        )?;
        self.editor.set_service_name(name);
        self.editor.set_amount_input(amount);

        let editing = self.editor.service_edit_pending().is_some();
        match self.editor.add_or_save_service() {
            Ok(()) => io::print_success(if editing {
                "Service saved."
            } else {
                "Service added."
            }),
            Err(err) => io::print_error(err),
        }
        Ok(LoopControl::Continue)
    }

    fn edit_service(&mut self) -> Result<LoopControl, CliError> {
        let rows = self.service_rows();
        if rows.is_empty() {
            io::print_warning("No services in the draft yet.");
            return Ok(LoopControl::Continue);
        }
        let index = io::select_index(&self.theme, "Edit which service?", &rows)?;
        if let Err(err) = self.editor.edit_service(index) {
            io::print_error(err);
            return Ok(LoopControl::Continue);
        }
        // Re-enter the add flow with the fields pre-filled.
        self.add_service()
    }

    fn remove_service(&mut self) -> Result<LoopControl, CliError> {
        let rows = self.service_rows();
        if rows.is_empty() {
            io::print_warning("No services in the draft yet.");
            return Ok(LoopControl::Continue);
        }
        let index = io::select_index(&self.theme, "Remove which service?", &rows)?;
        if io::confirm_action(&self.theme, &format!("Remove `{}`?", rows[index]), false)? {
            match self.editor.remove_service(index) {
                Ok(()) => io::print_success("Service removed."),
                Err(err) => io::print_error(err),
            }
        }
        Ok(LoopControl::Continue)
    }

    fn show_draft(&self) -> LoopControl {
        output::section("Current draft");
        if !self.editor.client_name().is_empty() {
            output::plain(format!("Client: {}", self.editor.client_name()));
        }
        if !self.editor.visit_date().is_empty() {
            output::plain(format!("Date: {}", self.editor.visit_date()));
        }
        let rows = self.service_rows();
        if rows.is_empty() {
            io::print_info("No services in the draft yet.");
        } else {
            for (i, row) in rows.iter().enumerate() {
                output::plain(format!("{}. {}", i + 1, row));
            }
            io::print_info(format!(
                "Partial total: {} {}",
                self.config.currency_symbol,
                self.editor.partial_total()
            ));
        }
        LoopControl::Continue
    }

    fn finalize_budget(&mut self) -> Result<LoopControl, CliError> {
        let client = io::prompt_text(&self.theme, "Client name", self.editor.client_name())?;
        let initial_date = if self.editor.visit_date().is_empty() {
            Local::now().date_naive().to_string()
        } else {
            self.editor.visit_date().to_string()
        };
        let date = io::prompt_date(&self.theme, "Visit date (YYYY-MM-DD)", &initial_date)?;
        self.editor.set_client_name(client);
        self.editor.set_visit_date(date);

        let editing = self.editor.budget_edit_pending().is_some();
        match self.editor.finalize_budget() {
            Ok(()) => io::print_success(if editing {
                "Budget updated."
            } else {
                "Budget finalized."
            }),
            Err(err) => io::print_error(err),
        }
        Ok(LoopControl::Continue)
    }

    fn list_budgets(&self) -> LoopControl {
        output::section("Saved budgets");
        if self.editor.budgets().is_empty() {
            io::print_info("No budgets yet.");
            return LoopControl::Continue;
        }
        for (i, row) in self.budget_rows().iter().enumerate() {
            output::plain(format!("{}. {}", i + 1, row));
        }
        LoopControl::Continue
    }

    fn edit_budget(&mut self) -> Result<LoopControl, CliError> {
        let rows = self.budget_rows();
        if rows.is_empty() {
            io::print_warning("No budgets yet.");
            return Ok(LoopControl::Continue);
        }
        let index = io::select_index(&self.theme, "Edit which budget?", &rows)?;
        match self.editor.edit_budget(index) {
            Ok(()) => {
                io::print_info("Budget loaded into the draft. Finalize to save your changes.")
            }
            Err(err) => io::print_error(err),
        }
        Ok(LoopControl::Continue)
    }

    fn remove_budget(&mut self) -> Result<LoopControl, CliError> {
        let rows = self.budget_rows();
        if rows.is_empty() {
            io::print_warning("No budgets yet.");
            return Ok(LoopControl::Continue);
        }
        let index = io::select_index(&self.theme, "Remove which budget?", &rows)?;
        if io::confirm_action(&self.theme, &format!("Remove `{}`?", rows[index]), false)? {
            match self.editor.remove_budget(index) {
                Ok(()) => io::print_success("Budget removed."),
                Err(err) => io::print_error(err),
            }
        }
        Ok(LoopControl::Continue)
    }

    fn export(&mut self) -> Result<LoopControl, CliError> {
        if self.editor.budgets().is_empty() {
            io::print_warning("Nothing to export yet.");
            return Ok(LoopControl::Continue);
        }
        let dir = self
            .config
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        match export::export_to_file(self.editor.budgets(), &dir) {
            Ok(path) => io::print_success(format!("Exported {}", path.display())),
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                io::print_error(format!("Export failed: {err}"));
            }
        }
        Ok(LoopControl::Continue)
    }

    fn settings(&mut self) -> Result<LoopControl, CliError> {
        let current_dir = self
            .config
            .export_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        let dir = io::prompt_text(
            &self.theme,
            "Export directory (blank for the current directory)",
            &current_dir,
        )?;
        let symbol = io::prompt_text(&self.theme, "Currency symbol", &self.config.currency_symbol)?;

        self.config.export_dir = if dir.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(dir.trim()))
        };
        if !symbol.trim().is_empty() {
            self.config.currency_symbol = symbol.trim().to_string();
        }
        self.config_manager.save(&self.config)?;
        io::print_success("Settings saved.");
        Ok(LoopControl::Continue)
    }

    fn service_rows(&self) -> Vec<String> {
        self.editor
            .draft_services()
            .iter()
            .map(|service| {
                format!(
                    "{} - {} {}",
                    service.name, self.config.currency_symbol, service.amount
                )
            })
            .collect()
    }

    fn budget_rows(&self) -> Vec<String> {
        self.editor
            .budgets()
            .iter()
            .map(|budget| {
                format!(
                    "Client: {} | Date: {} | {} service(s) | Total: {} {}",
                    budget.client_name,
                    budget.visit_date,
                    budget.service_count(),
                    self.config.currency_symbol,
                    budget.total
                )
            })
            .collect()
    }
}
