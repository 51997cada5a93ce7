use crate::app::{Generation, Source};
use crate::library::SavedBrands;
use crate::record::BrandToneRecord;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

pub struct OutputHandler {
    json: bool,
}

impl OutputHandler {
    pub fn new() -> Self {
        Self { json: false }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn print_error(&mut self, content: &str) -> io::Result<()> {
        eprintln!("{} {}", style("Error:").red().bold(), content);
        Ok(())
    }

    pub fn print_advisory(&mut self, content: &str) -> io::Result<()> {
        eprintln!("{}", style(content).yellow());
        Ok(())
    }

    pub fn print_success(&mut self, content: &str) -> io::Result<()> {
        println!("{} {}", style("✓").green().bold(), content);
        Ok(())
    }

    pub fn print_system(&mut self, content: &str) -> io::Result<()> {
        println!("{}", style(content).yellow().dim());
        Ok(())
    }

    /// Spinner shown while waiting on the generation service.
    pub fn start_spinner(&self, message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    pub fn print_generation(&mut self, generation: &Generation) -> io::Result<()> {
        if let Some(advisory) = &generation.advisory {
            self.print_advisory(advisory)?;
        }
        if !self.json {
            let source = match generation.source {
                Source::Remote => "🤖 Generated with AI (Google Gemini)",
                Source::Fallback => "📋 Generated from templates",
            };
            self.print_system(source)?;
        }
        self.print_record(&generation.record)
    }

    pub fn print_record(&mut self, record: &BrandToneRecord) -> io::Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(record).map_err(io::Error::other)?;
            println!("{}", json);
            return Ok(());
        }

        println!();
        println!("{}", style(format!("Brand tone guide: {}", record.brand)).cyan().bold());
        println!();
        println!("{}", style("Tone").bold());
        println!("  {}", record.tone_description);

        for copy in &record.copies {
            println!();
            println!("{}", style(format!("Copy #{}", copy.index)).bold());
            println!("  {} {}", style("[Professional]").blue(), copy.professional);
            println!("  {} {}", style("[Cute]").magenta(), copy.cute);
            println!("  {} {}", style("[Bold]").red(), copy.aggressive);
        }

        println!();
        println!("{} {}", style("Suggested:").green().bold(), record.vocab_suggest.join(", "));
        println!("{} {}", style("Avoid:").red().bold(), record.vocab_avoid.join(", "));
        Ok(())
    }

    pub fn print_saved_list(&mut self, saved: &SavedBrands) -> io::Result<()> {
        if self.json {
            let names: Vec<&String> = saved.keys().collect();
            let json = serde_json::to_string_pretty(&names).map_err(io::Error::other)?;
            println!("{}", json);
            return Ok(());
        }

        if saved.is_empty() {
            self.print_system("No saved brands")?;
            return Ok(());
        }

        println!("{}", style("Saved brands").cyan().bold());
        for (name, entry) in saved {
            println!(
                "  {} {}",
                style(name).white().bold(),
                style(format!("(saved {})", entry.saved_at.format("%Y-%m-%d %H:%M UTC"))).dim()
            );
        }
        Ok(())
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
