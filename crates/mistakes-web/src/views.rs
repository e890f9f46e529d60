//! HTML pages.
//!
//! Pages are written straight into a `String`. Every user-supplied value goes
//! through [`Escaped`] on its way out.

use std::fmt::{self, Write as _};

use chrono::{NaiveDate, Utc};
use mistakes_core::{Mistake, mistake::format_date};

// ─── Escaping ─────────────────────────────────────────────────────────────────

/// Displays its contents with HTML special characters escaped. Safe both in
/// text nodes and inside double-quoted attribute values.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut rest = self.0;
    while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
      f.write_str(&rest[..i])?;
      f.write_str(match rest.as_bytes()[i] {
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        b'"' => "&quot;",
        _ => "&#39;",
      })?;
      rest = &rest[i + 1..];
    }
    f.write_str(rest)
  }
}

// ─── Page models ──────────────────────────────────────────────────────────────

/// Filter values echoed back into the search form, already trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
  pub q:     String,
  pub topic: String,
  pub from:  String,
  pub to:    String,
}

pub struct IndexPage<'a> {
  /// Default for the add form's date field.
  pub today:    NaiveDate,
  pub filters:  &'a Filters,
  pub mistakes: &'a [Mistake],
  /// Number of stored mistakes regardless of filters.
  pub total:    u64,
  pub topics:   &'a [String],
}

pub struct RulesPage<'a> {
  pub filters: &'a Filters,
  pub items:   &'a [Mistake],
  pub topics:  &'a [String],
}

pub struct EditPage<'a> {
  pub mistake: &'a Mistake,
  pub topics:  &'a [String],
}

// ─── Pages ────────────────────────────────────────────────────────────────────

pub fn index(page: &IndexPage<'_>) -> Result<String, fmt::Error> {
  let mut out = String::new();
  open_layout(&mut out, "Mistake log")?;

  out.push_str("<section class=\"add\">\n<h2>Log a mistake</h2>\n");
  out.push_str("<form method=\"post\" action=\"/add\" class=\"entry\">\n");
  entry_fields(&mut out, None, page.today)?;
  out.push_str("<button type=\"submit\">Save</button>\n</form>\n</section>\n");

  filter_form(&mut out, "/", page.filters)?;

  writeln!(
    out,
    "<p class=\"count\">{} shown of {} logged</p>",
    page.mistakes.len(),
    page.total,
  )?;

  if page.mistakes.is_empty() {
    out.push_str("<p class=\"empty\">No mistakes match.</p>\n");
  }
  for m in page.mistakes {
    mistake_card(&mut out, m)?;
  }

  topic_datalist(&mut out, page.topics)?;
  close_layout(&mut out);
  Ok(out)
}

pub fn rules(page: &RulesPage<'_>) -> Result<String, fmt::Error> {
  let mut out = String::new();
  open_layout(&mut out, "Rules to remember")?;

  filter_form(&mut out, "/rules", page.filters)?;
  writeln!(out, "<p class=\"count\">{} rules</p>", page.items.len())?;

  out.push_str("<section class=\"rules\">\n");
  for m in page.items {
    writeln!(
      out,
      "<article class=\"rule\">\n\
       <p class=\"fix\">{}</p>\n\
       <p class=\"pattern\">{}</p>\n\
       <footer>{} &middot; {}</footer>\n\
       </article>",
      Escaped(&m.fix_rule),
      Escaped(&m.pattern),
      Escaped(&m.topic),
      format_date(m.date),
    )?;
  }
  out.push_str("</section>\n");

  topic_datalist(&mut out, page.topics)?;
  close_layout(&mut out);
  Ok(out)
}

pub fn edit(page: &EditPage<'_>) -> Result<String, fmt::Error> {
  let m = page.mistake;
  let mut out = String::new();
  open_layout(&mut out, "Edit mistake")?;

  writeln!(
    out,
    "<form method=\"post\" action=\"/edit?id={}\" class=\"entry\">",
    m.id,
  )?;
  entry_fields(&mut out, Some(m), m.date)?;
  out.push_str("<button type=\"submit\">Update</button>\n</form>\n");

  writeln!(
    out,
    "<form method=\"post\" action=\"/delete\" class=\"delete\">\n\
     <input type=\"hidden\" name=\"id\" value=\"{}\">\n\
     <button type=\"submit\">Delete</button>\n\
     </form>",
    m.id,
  )?;
  writeln!(
    out,
    "<p class=\"meta\">Logged {}. <a href=\"/\">Back</a></p>",
    m.created_at.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC"),
  )?;

  topic_datalist(&mut out, page.topics)?;
  close_layout(&mut out);
  Ok(out)
}

// ─── Fragments ────────────────────────────────────────────────────────────────

fn open_layout(out: &mut String, title: &str) -> fmt::Result {
  writeln!(
    out,
    "<!doctype html>\n\
     <html lang=\"en\">\n\
     <head>\n\
     <meta charset=\"utf-8\">\n\
     <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
     <title>{title}</title>\n\
     <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
     </head>\n\
     <body>\n\
     <header><nav><a href=\"/\">Log</a> <a href=\"/rules\">Rules</a></nav></header>\n\
     <main>\n\
     <h1>{title}</h1>",
    title = Escaped(title),
  )
}

fn close_layout(out: &mut String) { out.push_str("</main>\n</body>\n</html>\n"); }

/// Inputs shared by the add and edit forms. Field names are the column names.
fn entry_fields(
  out: &mut String,
  values: Option<&Mistake>,
  date: NaiveDate,
) -> fmt::Result {
  let get = |f: fn(&Mistake) -> &str| values.map(f).unwrap_or_default();

  writeln!(
    out,
    "<label>Topic <input name=\"topic\" list=\"topics\" required value=\"{}\"></label>\n\
     <label>Date <input type=\"date\" name=\"date\" required value=\"{}\"></label>",
    Escaped(get(|m| m.topic.as_str())),
    format_date(date),
  )?;

  let areas: [(&str, &str, fn(&Mistake) -> &str); 4] = [
    ("problem_statement", "Problem", |m| m.problem.as_str()),
    ("what_i_missed", "What I missed", |m| m.missed.as_str()),
    ("fix_rule", "Fix rule", |m| m.fix_rule.as_str()),
    ("pattern_to_remember", "Pattern to remember", |m| m.pattern.as_str()),
  ];
  for (name, label, field) in areas {
    writeln!(
      out,
      "<label>{label} <textarea name=\"{name}\" rows=\"3\" required>{}</textarea></label>",
      Escaped(get(field)),
    )?;
  }
  Ok(())
}

fn filter_form(out: &mut String, action: &str, filters: &Filters) -> fmt::Result {
  writeln!(
    out,
    "<form method=\"get\" action=\"{action}\" class=\"filters\">\n\
     <input type=\"search\" name=\"q\" placeholder=\"Search\" value=\"{q}\">\n\
     <input name=\"topic\" list=\"topics\" placeholder=\"Topic\" value=\"{topic}\">\n\
     <label>From <input type=\"date\" name=\"from\" value=\"{from}\"></label>\n\
     <label>To <input type=\"date\" name=\"to\" value=\"{to}\"></label>\n\
     <button type=\"submit\">Filter</button>\n\
     <button type=\"submit\" formaction=\"/export.csv\">Export CSV</button>\n\
     <a href=\"{action}\">Clear</a>\n\
     </form>",
    action = Escaped(action),
    q = Escaped(&filters.q),
    topic = Escaped(&filters.topic),
    from = Escaped(&filters.from),
    to = Escaped(&filters.to),
  )
}

fn mistake_card(out: &mut String, m: &Mistake) -> fmt::Result {
  writeln!(
    out,
    "<article class=\"mistake\">\n\
     <header><span class=\"topic\">{topic}</span> <time>{date}</time> \
     <a href=\"/edit?id={id}\">Edit</a></header>\n\
     <dl>\n\
     <dt>Problem</dt><dd>{problem}</dd>\n\
     <dt>What I missed</dt><dd>{missed}</dd>\n\
     <dt>Fix rule</dt><dd>{fix_rule}</dd>\n\
     <dt>Pattern</dt><dd>{pattern}</dd>\n\
     </dl>\n\
     <form method=\"post\" action=\"/delete\" class=\"delete\">\
     <input type=\"hidden\" name=\"id\" value=\"{id}\">\
     <button type=\"submit\">Delete</button></form>\n\
     </article>",
    id = m.id,
    topic = Escaped(&m.topic),
    date = format_date(m.date),
    problem = Escaped(&m.problem),
    missed = Escaped(&m.missed),
    fix_rule = Escaped(&m.fix_rule),
    pattern = Escaped(&m.pattern),
  )
}

fn topic_datalist(out: &mut String, topics: &[String]) -> fmt::Result {
  out.push_str("<datalist id=\"topics\">\n");
  for t in topics {
    writeln!(out, "<option value=\"{}\">", Escaped(t))?;
  }
  out.push_str("</datalist>\n");
  Ok(())
}
