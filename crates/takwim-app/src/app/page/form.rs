use salvo::{Depot, Response, handler, http::StatusCode, writing::Text};
use tracing::error;

use crate::config::{current_year, get_config_from_depot};

const FORM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Excel Calendar Generator</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #1B4F72 0%, #5B2C6F 100%);
            min-height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            padding: 20px;
        }
        .container {
            background: white;
            border-radius: 16px;
            padding: 40px;
            box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
            text-align: center;
            max-width: 450px;
            width: 100%;
        }
        h1 { color: #1B4F72; margin-bottom: 10px; font-size: 28px; }
        .subtitle { color: #666; margin-bottom: 30px; font-size: 14px; }
        .form-group { margin-bottom: 25px; }
        label { display: block; color: #333; font-weight: 600; margin-bottom: 10px; font-size: 16px; }
        select {
            width: 100%;
            padding: 15px 20px;
            font-size: 18px;
            border: 2px solid #ddd;
            border-radius: 8px;
            background: white;
            cursor: pointer;
        }
        select:focus { outline: none; border-color: #5B2C6F; }
        button {
            width: 100%;
            padding: 15px 30px;
            font-size: 18px;
            font-weight: 600;
            color: white;
            background: linear-gradient(135deg, #5B2C6F 0%, #1B4F72 100%);
            border: none;
            border-radius: 8px;
            cursor: pointer;
        }
        .features { margin-top: 30px; text-align: left; background: #f8f9fa; padding: 20px; border-radius: 8px; }
        .features h3 { color: #1B4F72; margin-bottom: 15px; font-size: 16px; }
        .features ul { list-style: none; }
        .features li { padding: 5px 0; color: #555; font-size: 14px; }
        .flag { font-size: 24px; margin-bottom: 15px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="flag">&#127474;&#127486;</div>
        <h1>Excel Calendar Generator</h1>
        <p class="subtitle">Generate yearly calendar with Malaysian public and school holidays</p>
        <form method="POST" action="">
            <div class="form-group">
                <label for="year">Select Year</label>
                <select name="year" id="year">
{{YEAR_OPTIONS}}
                </select>
            </div>
            <button type="submit">Generate &amp; Download Excel</button>
        </form>
        <div class="features">
            <h3>Features</h3>
            <ul>
                <li>12 monthly sheets in one file</li>
                <li>Malaysian public holidays highlighted</li>
                <li>School holidays shaded</li>
                <li>Space to write daily activities</li>
                <li>Weekend columns marked in grey</li>
            </ul>
        </div>
    </div>
</body>
</html>
"#;

/// ## Summary
/// Renders the form page offering `years`, with `selected` pre-selected.
#[must_use]
pub fn render_form_page(years: &[i32], selected: i32) -> String {
    let options = years
        .iter()
        .map(|year| {
            let marker = if *year == selected { " selected" } else { "" };
            format!("                    <option value=\"{year}\"{marker}>{year}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    FORM_TEMPLATE.replace("{{YEAR_OPTIONS}}", &options)
}

/// ## Summary
/// GET / - Shows the year selection form
#[handler]
pub async fn form_page(depot: &mut Depot, res: &mut Response) {
    let settings = match get_config_from_depot(depot) {
        Ok(s) => s,
        Err(e) => {
            error!(error = ?e, "Failed to get config from depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Text::Plain("Internal Server Error"));
            return;
        }
    };

    let now = current_year();
    let selected = settings.calendar.selected_year(now);
    let mut years = settings.calendar.year_options(now);
    if !years.contains(&selected) {
        years.push(selected);
        years.sort_unstable();
    }

    res.render(Text::Html(render_form_page(&years, selected)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_lists_every_year_once() {
        let page = render_form_page(&[2026, 2027, 2028], 2027);
        assert!(page.contains(r#"<option value="2026">2026</option>"#));
        assert!(page.contains(r#"<option value="2027" selected>2027</option>"#));
        assert!(page.contains(r#"<option value="2028">2028</option>"#));
        assert_eq!(page.matches("<option").count(), 3);
        assert!(!page.contains("{{YEAR_OPTIONS}}"));
    }

    #[test]
    fn test_form_posts_year_field() {
        let page = render_form_page(&[2026], 2026);
        assert!(page.contains(r#"<form method="POST""#));
        assert!(page.contains(r#"<select name="year""#));
    }
}
