use crate::state::ViewState;

pub fn render_index(view: &ViewState, weeks_in_month: u32) -> String {
    INDEX_HTML
        .replace("{{WEEK_OPTIONS}}", &week_options(view.week, weeks_in_month))
        .replace("{{EXPORT_BUTTON}}", export_button(view))
        .replace("{{TABLE}}", &view.display_html())
}

fn week_options(selected: u32, weeks_in_month: u32) -> String {
    let mut options: Vec<String> = (1..=weeks_in_month.max(1))
        .map(|week| week_option(week, week == selected))
        .collect();
    // A selection beyond the month (set through the API) gets a single extra entry.
    if selected > weeks_in_month.max(1) {
        options.push(week_option(selected, true));
    }
    options.join("\n          ")
}

fn week_option(week: u32, selected: bool) -> String {
    let marker = if selected { " selected" } else { "" };
    format!("<option value=\"{week}\"{marker}>Week {week}</option>")
}

fn export_button(view: &ViewState) -> &'static str {
    if view.export_payload().is_some() {
        r#"<a id="generate-xml" class="btn-export" href="/export.xml" download="temperature_data.xml">Generate XML</a>"#
    } else {
        ""
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Temperatures</title>
  <style>
    :root {
      --bg-1: #eef4f8;
      --bg-2: #bcd7ea;
      --ink: #1f2a33;
      --accent: #2f7fb5;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3eef6 60%, #f4f8fb 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 16px;
    }

    select {
      border-radius: 12px;
      padding: 10px 14px;
      font-size: 1rem;
    }

    #button-container {
      display: flex;
      gap: 12px;
    }

    button,
    .btn-export {
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      color: white;
    }

    #start-tracking {
      background: var(--accent);
    }

    .btn-export {
      background: var(--accent-2);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
    }

    th,
    td {
      padding: 12px 16px;
      text-align: left;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    th {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .error {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weekly Temperatures</h1>
      <p class="subtitle">Daily minimum and maximum temperatures for New York, by week of the current month.</p>
    </header>

    <form id="week-form" class="controls" method="post" action="/week">
      <label for="week-select">Week</label>
      <select id="week-select" name="week">
          {{WEEK_OPTIONS}}
      </select>
      <div id="button-container">
        <button id="start-tracking" type="submit" formaction="/track">Start tracking</button>
        {{EXPORT_BUTTON}}
      </div>
    </form>

    <section id="table-container">{{TABLE}}</section>
  </main>

  <script>
    const weekSelect = document.getElementById('week-select');
    weekSelect.addEventListener('change', () => weekSelect.form.submit());
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailySeries, DateRange};
    use chrono::NaiveDate;

    fn loaded_view() -> ViewState {
        let start = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        let range = DateRange {
            start,
            end: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        };
        let series = DailySeries::from_columns(vec![start], vec![0.5], vec![4.0]).unwrap();
        ViewState::new(2).loaded(range, series)
    }

    #[test]
    fn idle_page_has_selector_without_export() {
        let html = render_index(&ViewState::new(1), 5);
        assert_eq!(html.matches("<option ").count(), 5);
        assert!(html.contains("<option value=\"1\" selected>Week 1</option>"));
        assert!(html.contains("id=\"start-tracking\""));
        assert!(!html.contains("generate-xml"));
        assert!(html.contains("<section id=\"table-container\"></section>"));
    }

    #[test]
    fn loaded_page_shows_table_and_export() {
        let html = render_index(&loaded_view(), 5);
        assert!(html.contains("<option value=\"2\" selected>Week 2</option>"));
        assert!(html.contains("id=\"generate-xml\""));
        assert!(html.contains("<td>0.5 &deg;C</td>"));
    }

    #[test]
    fn selection_beyond_month_adds_one_option() {
        let html = render_index(&ViewState::new(9), 5);
        assert_eq!(html.matches("<option ").count(), 6);
        assert!(html.contains("<option value=\"5\">Week 5</option>"));
        assert!(html.contains("<option value=\"9\" selected>Week 9</option>"));
    }

    #[test]
    fn huge_selection_keeps_page_small() {
        let view = ViewState::new(1).select_week(u32::MAX);
        let html = render_index(&view, 5);
        assert_eq!(html.matches("<option ").count(), 5 + 1);
        assert_eq!(html.matches(" selected>").count(), 1);
        assert!(html.contains(&format!("<option value=\"{}\" selected>", u32::MAX)));
        assert!(html.len() < 16 * 1024);
    }
}
