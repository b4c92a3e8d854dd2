//! Server-rendered HTML for the upload form and its results.
//!
//! Every user-supplied string (filenames, prefix, error text, URLs) goes
//! through [`escape_html`] before it is placed in markup.

use randfile_core::{NamingMode, UploadOutcome, UploadResult};

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; max-width: 960px; }
    h1 { margin-bottom: 0.5rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    label { display: block; margin-top: 0.5rem; }
    input[type=text] { width: 100%; padding: 0.5rem; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    table { border-collapse: collapse; width: 100%; }
    td, th { text-align: left; padding: 0.4rem; border-bottom: 1px solid #eee; }
    code { background: #f6f8fa; padding: 0.2rem 0.4rem; word-break: break-all; }
    .warning { background: #fff4e5; border: 1px solid #f0b400; padding: 0.75rem; border-radius: 6px; }
    .success { background: #e7f6ec; border: 1px solid #2e9e53; padding: 0.75rem; border-radius: 6px; }
    .error { background: #fdecea; border: 1px solid #d93025; padding: 0.5rem 0.75rem; border-radius: 6px; margin: 0.25rem 0; }
"#;

const SCRIPT: &str = r#"
  const picker = document.getElementById('files');
  const selected = document.getElementById('selected');
  picker.addEventListener('change', () => {
    selected.innerHTML = '';
    for (const f of picker.files) {
      const li = document.createElement('li');
      li.textContent = `${f.name} (${(f.size / 1024).toFixed(1)} KB)`;
      selected.appendChild(li);
    }
  });
  for (const btn of document.querySelectorAll('button[data-url]')) {
    btn.addEventListener('click', () => {
      navigator.clipboard.writeText(btn.dataset.url);
      btn.textContent = 'URL copied to clipboard!';
    });
  }
"#;

const HOW_TO_USE: &str = r#"
  <details class="card">
    <summary>How to use</summary>
    <ol>
      <li>Select one or more files using the file picker above</li>
      <li>Choose how you want to name your files:
        <ul>
          <li>Use original filename: Keeps the original file names</li>
          <li>Use random filename: Generates random UUIDs for the file names</li>
          <li>Custom filename: Enter a prefix for your files (timestamp will be added automatically)</li>
        </ul>
      </li>
      <li>Click the "Upload Files" button</li>
      <li>Copy the generated URLs</li>
      <li>Share the URLs with others to access your files</li>
    </ol>
  </details>
"#;

/// Form state echoed back into the page.
#[derive(Debug, Default)]
pub struct FormView<'a> {
    pub mode: NamingMode,
    pub prefix: &'a str,
    pub warning: Option<&'a str>,
}

/// The upload form on its own.
pub fn render_form(view: &FormView<'_>) -> String {
    layout("", view)
}

/// Results of a submission above a fresh form.
pub fn render_results(results: &[UploadResult]) -> String {
    layout(&results_section(results), &FormView::default())
}

fn layout(results_html: &str, view: &FormView<'_>) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>S3 File Uploader</title>
  <style>{style}</style>
</head>
<body>
  <h1>S3 File Uploader</h1>
  <p>Upload files to AWS S3 and get their URLs. Pick your files, choose a naming option, and submit.</p>
{results}
{form}
{how_to_use}
  <script>{script}</script>
</body>
</html>
"#,
        style = STYLE,
        results = results_html,
        form = form_section(view),
        how_to_use = HOW_TO_USE,
        script = SCRIPT,
    )
}

fn form_section(view: &FormView<'_>) -> String {
    let radios: String = NamingMode::ALL
        .iter()
        .map(|mode| {
            let checked = if *mode == view.mode { " checked" } else { "" };
            format!(
                r#"      <label><input type="radio" name="naming_mode" value="{value}"{checked} /> {label}</label>
"#,
                value = mode.as_str(),
                checked = checked,
                label = mode.label(),
            )
        })
        .collect();

    let warning = view
        .warning
        .map(|w| format!(r#"    <p class="warning">{}</p>"#, escape_html(w)))
        .unwrap_or_default();

    format!(
        r#"  <form class="card" method="post" action="/upload" enctype="multipart/form-data">
{warning}
    <h2>File Naming Options</h2>
    <fieldset>
      <legend>Choose how to name your files:</legend>
{radios}    </fieldset>
    <label for="prefix">Enter filename prefix (without extension), used with Custom filename:</label>
    <input type="text" id="prefix" name="prefix" value="{prefix}" />
    <h2>Choose files to upload</h2>
    <input type="file" id="files" name="files" multiple />
    <ul id="selected"></ul>
    <button type="submit">Upload Files</button>
  </form>"#,
        warning = warning,
        radios = radios,
        prefix = escape_html(view.prefix),
    )
}

fn results_section(results: &[UploadResult]) -> String {
    let mut html = String::new();

    for result in results {
        if let Some(message) = result.error_message() {
            html.push_str(&format!(
                "  <p class=\"error\">{}</p>\n",
                escape_html(&message)
            ));
        }
    }

    let rows: Vec<String> = results
        .iter()
        .filter_map(|result| match &result.outcome {
            UploadOutcome::Uploaded { url } => Some(format!(
                r#"      <tr><td>{name}</td><td><code>{url}</code></td><td><button type="button" data-url="{url}">Copy URL</button></td></tr>"#,
                name = escape_html(&result.original_name),
                url = escape_html(url),
            )),
            UploadOutcome::Failed { .. } => None,
        })
        .collect();

    if !rows.is_empty() {
        html.push_str(&format!(
            r#"  <p class="success">Successfully uploaded {count} file(s)!</p>
  <div class="card">
    <h2>Uploaded Files and URLs</h2>
    <table>
      <tr><th>File</th><th>URL</th><th></th></tr>
{rows}
    </table>
  </div>
"#,
            count = rows.len(),
            rows = rows.join("\n"),
        ));
    }

    html
}

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
