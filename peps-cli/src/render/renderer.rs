use super::theme::ReviewTheme;
use peps_core::{
    ActivityRecord, AnalysisResult, MessageDraft, ReviewTag, Summary,
    render::{format_activity_detail, format_date},
    review::strip_educators,
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: ReviewTheme::default_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%d/%m/%Y".to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.skin.print_text(&md);
        } else {
            println!("{}", message);
        }
    }

    pub fn print_summary(&self, summary: &Summary) {
        self.print_info(&format!(
            "Incomplètes : {} | Annulées : {} | Total : {}",
            summary.incomplete, summary.cancelled, summary.total
        ));
    }

    /// `3. 05/01/2024 [Présences] Jardin — Dupont Marie`
    pub fn print_activity_line(&self, index: usize, record: &ActivityRecord) {
        let tag = ReviewTag::of(record);
        let mut date = format_date(record, &self.opts.date_format);
        let mut label = strip_educators(&record.activity, &record.educators);
        let mut badge = format!("[{}]", tag.as_ref());
        let mut educators = record.educators.join(", ");
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            badge = badge.with(ReviewTheme::tag_color(tag)).to_string();
            label = label.with(Color::Yellow).to_string();
            educators = educators.with(Color::Green).to_string();
        }
        if record.educators.is_empty() {
            println!("{:>3}. {} {} {}", index, date, badge, label);
        } else {
            println!("{:>3}. {} {} {} — {}", index, date, badge, label, educators);
        }
    }

    pub fn print_activities(&self, result: &AnalysisResult) {
        for (i, record) in result.activities.iter().enumerate() {
            if self.opts.short_mode {
                self.print_activity_line(i + 1, record);
                continue;
            }
            let mut md = format_activity_detail(record, &self.opts.date_format);
            if !record.educators.is_empty() {
                md.push_str(&format!("*Éducateurs : {}*\n", record.educators.join(", ")));
            }
            self.print_md(&format!("# {}.\n{md}", i + 1));

            if i + 1 < result.activities.len() {
                println!();
            }
            self.print_md("---\n");
        }
    }

    pub fn print_draft(&self, draft: &MessageDraft) {
        let header = if draft.cc.is_empty() {
            format!("To: {}\nSubject: {}\n", draft.to, draft.subject)
        } else {
            format!(
                "To: {}\nCc: {}\nSubject: {}\n",
                draft.to, draft.cc, draft.subject
            )
        };
        if self.opts.use_color {
            print!("{}", header.with(Color::Cyan));
        } else {
            print!("{header}");
        }
        println!();
        println!("{}", draft.body);
    }
}
