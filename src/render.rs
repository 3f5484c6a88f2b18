//! Server-rendered HTML pages.

use crate::logic::{FormMode, TeamForm, TournamentView};
use crate::models::TeamField;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One-shot notification shown at the top of the team form.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            destructive: false,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            title: "Team Creation Failed".to_string(),
            description: description.into(),
            destructive: true,
        }
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n\
         <body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Bare page with a single message ("Tournament not found", ...).
pub fn message_page(message: &str) -> String {
    layout(message, &format!("<div class=\"message\">{}</div>", escape(message)))
}

pub fn tournament_page(view: &TournamentView) -> String {
    let body = format!(
        r#"<div class="container">
<div class="banner">
<img src="{banner}" alt="{name}">
<div class="banner-overlay">
<h1>{name}</h1>
<span class="date">{start_date}</span> <span class="time">{start_time}</span>
</div>
</div>
<div class="details">
<section>
<h2>Tournament Details</h2>
<p class="prize-pool">Prize Pool: {prize_pool}</p>
<p class="participants">Participants: {participants}</p>
<p class="mode">Mode: {mode}</p>
<p class="entry-fee">Entry Fee: {entry_fee}</p>
<p>Status: <span class="status {badge}">{status}</span></p>
</section>
<section>
<h2>Host</h2>
<img class="host-photo" src="{host_photo}" alt="{host_name}" width="50" height="50">
<span class="host-name">{host_name}</span>
</section>
</div>
<section><h2>Description</h2><p class="description">{description}</p></section>
<section><h2>Rules</h2><p class="rules">{rules}</p></section>
<section>
<h2>Schedule</h2>
<div class="schedule">
<div><span>Tournament Starts</span><strong>{starts_at}</strong></div>
<div><span>Tournament Ends</span><strong>{ends_at}</strong></div>
</div>
</section>
<a class="register" href="{register}">Register for Tournament</a>
</div>"#,
        banner = escape(&view.banner_photo),
        name = escape(&view.name),
        start_date = escape(&view.start_date),
        start_time = escape(&view.start_time),
        prize_pool = escape(&view.prize_pool),
        participants = escape(&view.participants),
        mode = escape(&view.mode),
        entry_fee = escape(&view.entry_fee),
        badge = view.badge_class,
        status = view.status_label,
        host_photo = escape(&view.host_photo),
        host_name = escape(&view.host_name),
        description = escape(&view.description),
        rules = escape(&view.rules),
        starts_at = escape(&view.starts_at),
        ends_at = escape(&view.ends_at),
        register = escape(&view.register_href),
    );
    layout(&view.name, &body)
}

fn render_toast(out: &mut String, toast: &Toast) {
    let class = if toast.destructive {
        "toast destructive"
    } else {
        "toast"
    };
    let _ = writeln!(
        out,
        "<div class=\"{}\" role=\"status\"><strong>{}</strong><p>{}</p></div>",
        class,
        escape(&toast.title),
        escape(&toast.description)
    );
}

fn render_preview(out: &mut String, form: &TeamForm) {
    out.push_str(
        "<div class=\"preview\">\n<div class=\"preview-header\"><h1>Preview</h1>\
         <form method=\"post\" action=\"/create/team/close-preview\">\
         <button type=\"submit\" class=\"close\">Close</button></form></div>\n",
    );
    for row in form.preview().rows {
        let _ = writeln!(
            out,
            "<span class=\"preview-row\"><h3>{}: </h3><p>{}</p></span>",
            escape(row.label),
            escape(&row.value)
        );
    }
    out.push_str("</div>\n");
}

/// Team creation form, with the preview overlay when the form is in preview mode.
pub fn team_form_page(form: &TeamForm, toast: Option<&Toast>) -> String {
    let mut body = String::from("<div class=\"container team-form\">\n");
    if let Some(toast) = toast {
        render_toast(&mut body, toast);
    }
    if form.mode() == FormMode::Previewing {
        render_preview(&mut body, form);
    }
    body.push_str(
        "<h2>Create Your Team</h2>\n<form method=\"post\" action=\"/create/team\">\n\
         <div class=\"fields\">\n",
    );
    let image = form.draft().image.as_deref().unwrap_or("");
    let _ = writeln!(
        body,
        "<label>Image<input type=\"text\" name=\"image\" value=\"{}\" \
         placeholder=\"Image URL\"></label>",
        escape(image)
    );
    for field in TeamField::ALL {
        let _ = writeln!(
            body,
            "<label>{label}<input type=\"text\" name=\"{key}\" value=\"{value}\" \
             placeholder=\"{hint}\"></label>",
            label = escape(field.label()),
            key = field.key(),
            value = escape(form.value(field)),
            hint = escape(field.input_hint()),
        );
    }
    body.push_str(
        "</div>\n<div class=\"actions\">\
         <button type=\"submit\" name=\"action\" value=\"preview\">Preview</button>\
         <button type=\"submit\" name=\"action\" value=\"submit\">Create Team</button>\
         </div>\n</form>\n</div>",
    );
    layout("Create Your Team", &body)
}
