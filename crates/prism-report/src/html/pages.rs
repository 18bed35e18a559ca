//! The per-analysis report pages and the consolidated document.

use prism_analysis::counts::{CountEntry, FreqEntry, GlossedCount};
use prism_analysis::pipeline::AnalysisBundle;
use prism_analysis::text::{detect_script, Script};

use crate::charts;

use super::{escape_html, page, section, stat_cards, table};

/// The vocabulary analysis page.
pub fn vocabulary_page(bundle: &AnalysisBundle) -> String {
    let vocab = &bundle.vocabulary;
    let mut body = String::new();

    let korean_texts = vocab
        .language_distribution
        .iter()
        .find(|e| e.value == "korean")
        .map(|e| e.count)
        .unwrap_or(0);

    body.push_str(&stat_cards(&[
        ("Unique Jobs".to_string(), vocab.total_jobs.to_string()),
        ("Total Bookings".to_string(), bundle.summary.total_bookings.to_string()),
        ("Unique Phrases".to_string(), vocab.unique_phrases.to_string()),
        ("Korean Texts".to_string(), korean_texts.to_string()),
    ]));

    if !vocab.language_distribution.is_empty() {
        let (labels, counts) = split_counts(&vocab.language_distribution);
        body.push_str(&section(
            "Language Distribution",
            &charts::donut("chart-languages", "Inquiry Languages", &labels, &counts),
        ));
    }

    if !vocab.top_phrases.is_empty() {
        let (labels, counts) = split_glossed(&vocab.top_phrases);
        let mut inner = charts::h_bar(
            "chart-phrases",
            "Most Frequent Inquiry Phrases",
            &labels,
            &counts,
        );
        inner.push_str(&glossed_table(&vocab.top_phrases, "Phrase"));
        body.push_str(&section("Top Inquiry Phrases", &inner));
    }

    if !vocab.top_job_names.is_empty() {
        body.push_str(&section(
            "Top Job Names",
            &glossed_table(&vocab.top_job_names, "Job Name"),
        ));
    }

    if !vocab.concept_mentions.is_empty() {
        body.push_str(&section(
            "Concept Vocabulary",
            &table(
                &["Concept Word", "Mentions"],
                &vocab
                    .concept_mentions
                    .iter()
                    .map(|e| vec![e.value.clone(), e.count.to_string()])
                    .collect::<Vec<_>>(),
            ),
        ));
    }

    page("Text & Vocabulary Analysis", &subtitle(bundle), &body)
}

/// The structured-patterns page.
pub fn patterns_page(bundle: &AnalysisBundle) -> String {
    let patterns = &bundle.patterns;
    let mut body = String::new();

    // Field frequency sections with a chart for the headline fields.
    for field in &patterns.fields {
        if field.entries.is_empty() {
            continue;
        }
        let mut inner = String::new();
        if matches!(field.field.as_str(), "shoot_types" | "shoot_locations" | "usages") {
            let entries: Vec<FreqEntry> = field.entries.iter().take(15).cloned().collect();
            let labels: Vec<String> = entries.iter().map(|e| e.value.clone()).collect();
            let counts: Vec<u64> = entries.iter().map(|e| e.count).collect();
            inner.push_str(&charts::h_bar(
                &format!("chart-{}", field.field),
                &title_case(&field.field),
                &labels,
                &counts,
            ));
        }
        inner.push_str(&format!(
            "<p>{} mentions across {} unique values</p>\n",
            field.total_mentions, field.unique_values
        ));
        inner.push_str(&freq_table(&field.entries, "Value"));
        body.push_str(&section(&title_case(&field.field), &inner));
    }

    // Numeric summaries.
    if !patterns.numeric.is_empty() {
        let rows: Vec<Vec<String>> = patterns
            .numeric
            .iter()
            .map(|s| {
                vec![
                    title_case(&s.metric),
                    s.count.to_string(),
                    fmt_f64(s.mean),
                    fmt_f64(s.median),
                    fmt_f64(s.min),
                    fmt_f64(s.max),
                ]
            })
            .collect();
        let mut inner = table(&["Metric", "Count", "Mean", "Median", "Min", "Max"], &rows);

        let hours: Vec<f64> = bundle
            .jobs
            .iter()
            .filter_map(|j| j.first().shoot_hours)
            .collect();
        if !hours.is_empty() {
            inner.push_str(&charts::histogram(
                "chart-shoot-hours",
                "Shoot Hours Distribution",
                &hours,
            ));
        }
        body.push_str(&section("Numeric Summaries", &inner));
    }

    // Outliers.
    if !patterns.outliers.is_empty() {
        let rows: Vec<Vec<String>> = patterns
            .outliers
            .iter()
            .map(|o| {
                vec![
                    title_case(&o.metric),
                    o.job_id.to_string(),
                    fmt_f64(o.value),
                    format!("{} – {}", fmt_f64(o.lower_fence), fmt_f64(o.upper_fence)),
                ]
            })
            .collect();
        body.push_str(&section(
            "Outlier Jobs",
            &table(&["Metric", "Job", "Value", "Expected Range"], &rows),
        ));
    }

    // Combinations.
    for combo in &patterns.combos {
        if combo.entries.is_empty() {
            continue;
        }
        let labels: Vec<String> = combo.entries.iter().map(|e| e.value.clone()).collect();
        let counts: Vec<u64> = combo.entries.iter().map(|e| e.count).collect();
        let mut inner = charts::h_bar(
            &format!("chart-combo-{}", slug(&combo.kind)),
            &format!("Top Combinations: {}", combo.kind),
            &labels,
            &counts,
        );
        inner.push_str(&freq_table(&combo.entries, "Combination"));
        body.push_str(&section(&format!("Combinations — {}", combo.kind), &inner));
    }

    if !patterns.full_patterns.is_empty() {
        body.push_str(&section(
            "Full Patterns (type + location + usage)",
            &freq_table(&patterns.full_patterns, "Pattern"),
        ));
    }

    if !patterns.heatmap.is_empty() {
        body.push_str(&section(
            "Shoot Type × Location",
            &charts::heatmap("chart-heatmap", "Type vs Location", &patterns.heatmap),
        ));
    }

    if !patterns.monthly.is_empty() {
        let labels: Vec<String> = patterns.monthly.iter().map(|m| m.month.clone()).collect();
        let counts: Vec<u64> = patterns.monthly.iter().map(|m| m.jobs).collect();
        let mut inner = charts::v_bar("chart-monthly", "Jobs by Month", &labels, &counts);
        if patterns.unparsed_dates > 0 {
            inner.push_str(&format!(
                "<p>{} jobs had unparseable start dates and are not shown.</p>\n",
                patterns.unparsed_dates
            ));
        }
        body.push_str(&section("Monthly Trend", &inner));
    }

    page("Booking Patterns Analysis", &subtitle(bundle), &body)
}

/// The VOC themes page. Returns None when the run had no VOC dataset.
pub fn voc_page(bundle: &AnalysisBundle) -> Option<String> {
    let voc = bundle.voc.as_ref()?;
    let mut body = String::new();

    body.push_str(&stat_cards(&[
        ("Feedback Entries".to_string(), voc.entry_count.to_string()),
        ("Themes Identified".to_string(), voc.theme_summaries.len().to_string()),
    ]));

    if !voc.theme_summaries.is_empty() {
        let labels: Vec<String> = voc.theme_summaries.iter().map(|t| t.theme.clone()).collect();
        let counts: Vec<u64> = voc.theme_summaries.iter().map(|t| t.entry_count).collect();
        let mut inner = charts::h_bar("chart-themes", "Entries per Theme", &labels, &counts);

        let rows: Vec<Vec<String>> = voc
            .theme_summaries
            .iter()
            .map(|t| {
                vec![
                    t.theme.clone(),
                    t.entry_count.to_string(),
                    format!("{:.1}%", t.share_pct),
                    t.sentence_count.to_string(),
                ]
            })
            .collect();
        inner.push_str(&table(&["Theme", "Entries", "Share", "Sentences"], &rows));
        body.push_str(&section("Theme Distribution", &inner));
    }

    for summary in &voc.theme_summaries {
        if summary.samples.is_empty() && summary.top_phrases.is_empty() {
            continue;
        }
        let mut inner = String::new();
        if !summary.top_phrases.is_empty() {
            inner.push_str("<h3>Common phrases</h3>\n");
            for phrase in &summary.top_phrases {
                inner.push_str(&format!(
                    "<span class=\"keyword-tag\">{} ({})</span>\n",
                    escape_html(&phrase.value),
                    phrase.count
                ));
            }
        }
        if !summary.samples.is_empty() {
            inner.push_str("<h3>What customers said</h3>\n");
            for sample in &summary.samples {
                inner.push_str(&format!(
                    "<div class=\"sample\">{} <span class=\"translation\">({}, {})</span></div>\n",
                    escape_html(&sample.sentence),
                    escape_html(&sample.category),
                    escape_html(&sample.user_type)
                ));
            }
        }
        body.push_str(&section(&summary.theme, &inner));
    }

    if !voc.korean_phrases.is_empty() || !voc.english_phrases.is_empty() {
        let mut inner = String::new();
        inner.push_str("<h3>Korean</h3>\n");
        inner.push_str(&count_table(&top_n(&voc.korean_phrases, 20), "Phrase"));
        inner.push_str("<h3>English</h3>\n");
        inner.push_str(&count_table(&top_n(&voc.english_phrases, 20), "Phrase"));
        body.push_str(&section("Most Frequent Phrases", &inner));
    }

    Some(page("VOC Thematic Analysis", &subtitle(bundle), &body))
}

/// The heuristic keywords page. Returns None when the run had no model data.
pub fn keywords_page(bundle: &AnalysisBundle, max_rows: usize) -> Option<String> {
    let keywords = bundle.keywords.as_ref()?;
    let mut body = String::new();

    let jobs_with_keywords = keywords
        .jobs
        .iter()
        .filter(|j| !j.job_keywords.is_empty() || !j.model_keywords.is_empty())
        .count();

    body.push_str(&stat_cards(&[
        ("Jobs Processed".to_string(), keywords.jobs.len().to_string()),
        ("Jobs with Keywords".to_string(), jobs_with_keywords.to_string()),
    ]));

    if !keywords.top_job_keywords.is_empty() {
        let (labels, counts) = split_counts(&keywords.top_job_keywords);
        body.push_str(&section(
            "Top Concept Keywords",
            &charts::h_bar("chart-job-keywords", "Concept Keywords", &labels, &counts),
        ));
    }
    if !keywords.top_model_keywords.is_empty() {
        let (labels, counts) = split_counts(&keywords.top_model_keywords);
        body.push_str(&section(
            "Top Model Keywords",
            &charts::h_bar("chart-model-keywords", "Model Keywords", &labels, &counts),
        ));
    }

    let mut rows_html = String::from("<table>\n<thead><tr><th>Job</th><th>Brand</th><th>Job Name</th><th>Job Keywords</th><th>Model Keywords</th><th>Models</th></tr></thead>\n<tbody>\n");
    for job in keywords.jobs.iter().take(max_rows) {
        rows_html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            job.job_id,
            escape_html(&job.brand_name),
            escape_html(&job.job_name),
            keyword_tags(&job.job_keywords, false),
            keyword_tags(&job.model_keywords, true),
            job.num_models
        ));
    }
    rows_html.push_str("</tbody>\n</table>\n");
    if keywords.jobs.len() > max_rows {
        rows_html.push_str(&format!(
            "<p>Showing {} of {} jobs; the full set is in the keywords CSV table.</p>\n",
            max_rows,
            keywords.jobs.len()
        ));
    }
    body.push_str(&section("Keywords by Job", &rows_html));

    Some(page("Heuristic Keywords", &subtitle(bundle), &body))
}

/// The visual dashboard page: one row per job with a client-side filter.
pub fn dashboard_page(bundle: &AnalysisBundle, max_rows: usize) -> String {
    let mut body = String::new();

    body.push_str(&stat_cards(&[
        ("Jobs".to_string(), bundle.summary.unique_jobs.to_string()),
        ("Bookings".to_string(), bundle.summary.total_bookings.to_string()),
        ("Models".to_string(), bundle.summary.unique_models.to_string()),
        ("Brands".to_string(), bundle.summary.unique_brands.to_string()),
    ]));

    let mut inner = String::from(
        "<input type=\"text\" id=\"job-filter\" placeholder=\"Filter by brand or job name…\" \
         style=\"width:100%;padding:10px;margin-bottom:12px;border:1px solid #ddd;border-radius:6px;\">\n",
    );

    inner.push_str("<table id=\"jobs-table\">\n<thead><tr><th>Job</th><th>Brand</th><th>Job Name</th><th>Language</th><th>Start</th><th>Hours</th><th>Models</th><th>Inquiry</th></tr></thead>\n<tbody>\n");
    for job in bundle.jobs.iter().take(max_rows) {
        let first = job.first();
        let language = match detect_script(&first.inquiry_text) {
            Script::Korean => "Korean",
            Script::English => "English",
            Script::Other => "Other",
            Script::Unknown => "—",
        };
        let model_names: Vec<&str> = job
            .bookings
            .iter()
            .map(|b| b.talent_name.as_str())
            .filter(|n| !n.is_empty())
            .collect();
        inner.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            job.job_id,
            escape_html(&first.brand_name),
            escape_html(&first.job_name),
            language,
            escape_html(&first.start_date_time),
            first
                .shoot_hours
                .map(|h| fmt_f64(h))
                .unwrap_or_else(|| "—".to_string()),
            escape_html(&model_names.join(", ")),
            escape_html(&truncate(&first.inquiry_text, 200)),
        ));
    }
    inner.push_str("</tbody>\n</table>\n");
    if bundle.jobs.len() > max_rows {
        inner.push_str(&format!(
            "<p>Showing {} of {} jobs.</p>\n",
            max_rows,
            bundle.jobs.len()
        ));
    }
    body.push_str(&section("Jobs", &inner));

    let mut html = page("Visual Dashboard", &subtitle(bundle), &body);
    // Client-side filter wiring; appended after the scaffold so the table
    // exists when the script runs.
    html = html.replace(
        "</body>",
        &format!("<script>\n{FILTER_JS}\n</script>\n</body>"),
    );
    html
}

/// The consolidated report: every analysis area in one printable document.
pub fn consolidated_page(bundle: &AnalysisBundle, title: &str) -> String {
    let summary = &bundle.summary;
    let mut body = String::new();

    // Executive summary.
    let mut exec = stat_cards(&[
        ("Total Jobs".to_string(), summary.unique_jobs.to_string()),
        ("Total Bookings".to_string(), summary.total_bookings.to_string()),
        ("Unique Models".to_string(), summary.unique_models.to_string()),
        ("Unique Clients".to_string(), summary.unique_clients.to_string()),
        ("Unique Brands".to_string(), summary.unique_brands.to_string()),
    ]);
    let mut highlights = String::from("<ul>\n");
    if let Some(region) = summary.top_regions.first() {
        highlights.push_str(&format!(
            "<li><strong>Primary region:</strong> {} ({} jobs)</li>\n",
            escape_html(&region.value),
            region.count
        ));
    }
    if let Some(nationality) = summary.top_nationalities.first() {
        highlights.push_str(&format!(
            "<li><strong>Most common model nationality:</strong> {} ({} bookings)</li>\n",
            escape_html(&nationality.value),
            nationality.count
        ));
    }
    if let Some(hours) = summary.avg_shoot_hours {
        highlights.push_str(&format!(
            "<li><strong>Average shoot duration:</strong> {} hours</li>\n",
            fmt_f64(hours)
        ));
    }
    if let Some(price) = summary.avg_price_client {
        highlights.push_str(&format!(
            "<li><strong>Average client budget:</strong> ₩{}</li>\n",
            fmt_money(price)
        ));
    }
    if let Some(price) = summary.avg_price_talent {
        highlights.push_str(&format!(
            "<li><strong>Average talent payment:</strong> ₩{}</li>\n",
            fmt_money(price)
        ));
    }
    highlights.push_str("</ul>\n");
    exec.push_str(&highlights);
    body.push_str(&section("Executive Summary", &exec));

    // Booking patterns.
    let mut patterns_inner = String::new();
    if let Some(usages) = bundle.patterns.fields.iter().find(|f| f.field == "usages") {
        patterns_inner.push_str("<h3>Usage distribution</h3>\n");
        patterns_inner.push_str(&freq_table(&top_freq(&usages.entries, 10), "Usage"));
    }
    if let Some(combo) = bundle.patterns.combos.first() {
        patterns_inner.push_str(&format!("<h3>Top {}</h3>\n", escape_html(&combo.kind)));
        patterns_inner.push_str(&freq_table(&top_freq(&combo.entries, 10), "Combination"));
    }
    if !bundle.patterns.monthly.is_empty() {
        let labels: Vec<String> = bundle.patterns.monthly.iter().map(|m| m.month.clone()).collect();
        let counts: Vec<u64> = bundle.patterns.monthly.iter().map(|m| m.jobs).collect();
        patterns_inner.push_str(&charts::v_bar(
            "chart-cons-monthly",
            "Jobs by Month",
            &labels,
            &counts,
        ));
    }
    if !patterns_inner.is_empty() {
        body.push_str(&section("Booking Patterns", &patterns_inner));
    }

    // Vocabulary.
    if !bundle.vocabulary.top_phrases.is_empty() {
        let glossed: Vec<GlossedCount> =
            bundle.vocabulary.top_phrases.iter().take(10).cloned().collect();
        body.push_str(&section(
            "Customer Vocabulary",
            &glossed_table(&glossed, "Phrase"),
        ));
    }

    // VOC.
    if let Some(ref voc) = bundle.voc {
        let rows: Vec<Vec<String>> = voc
            .theme_summaries
            .iter()
            .map(|t| {
                vec![
                    t.theme.clone(),
                    t.entry_count.to_string(),
                    format!("{:.1}%", t.share_pct),
                ]
            })
            .collect();
        body.push_str(&section(
            "Voice of Customer",
            &table(&["Theme", "Entries", "Share"], &rows),
        ));
    }

    // Keywords.
    if let Some(ref keywords) = bundle.keywords {
        if !keywords.top_job_keywords.is_empty() {
            body.push_str(&section(
                "Concept Keywords",
                &count_table(&keywords.top_job_keywords, "Keyword"),
            ));
        }
    }

    page(title, &subtitle(bundle), &body)
}

/// The site index: links to every generated page.
pub fn index_page(bundle: &AnalysisBundle, title: &str, entries: &[(String, String)]) -> String {
    let mut body = stat_cards(&[
        ("Jobs".to_string(), bundle.summary.unique_jobs.to_string()),
        ("Bookings".to_string(), bundle.summary.total_bookings.to_string()),
        ("Models".to_string(), bundle.summary.unique_models.to_string()),
    ]);

    let mut links = String::from("<ul class=\"index-links\">\n");
    for (file, description) in entries {
        links.push_str(&format!(
            "<li><a href=\"{}\">{}</a><span class=\"desc\">{}</span></li>\n",
            escape_html(file),
            escape_html(file),
            escape_html(description)
        ));
    }
    links.push_str("</ul>\n");
    body.push_str(&section("Reports", &links));

    page(title, &subtitle(bundle), &body)
}

const FILTER_JS: &str = r#"
var input = document.getElementById('job-filter');
if (input) {
    input.addEventListener('input', function() {
        var needle = input.value.toLowerCase();
        document.querySelectorAll('#jobs-table tbody tr').forEach(function(row) {
            row.style.display = row.textContent.toLowerCase().indexOf(needle) === -1 ? 'none' : '';
        });
    });
}
"#;

fn subtitle(bundle: &AnalysisBundle) -> String {
    format!("Generated {}", bundle.generated_at)
}

fn split_counts(entries: &[CountEntry]) -> (Vec<String>, Vec<u64>) {
    (
        entries.iter().map(|e| e.value.clone()).collect(),
        entries.iter().map(|e| e.count).collect(),
    )
}

fn split_glossed(entries: &[GlossedCount]) -> (Vec<String>, Vec<u64>) {
    (
        entries.iter().map(|e| e.value.clone()).collect(),
        entries.iter().map(|e| e.count).collect(),
    )
}

fn glossed_table(entries: &[GlossedCount], label: &str) -> String {
    let mut html = format!(
        "<table>\n<thead><tr><th>#</th><th>{}</th><th>English</th><th>Frequency</th></tr></thead>\n<tbody>\n",
        escape_html(label)
    );
    for (i, entry) in entries.iter().enumerate() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"translation\">{}</td><td>{}</td></tr>\n",
            i + 1,
            escape_html(&entry.value),
            escape_html(entry.gloss.as_deref().unwrap_or("")),
            entry.count
        ));
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn freq_table(entries: &[FreqEntry], label: &str) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.value.clone(),
                e.count.to_string(),
                format!("{:.1}%", e.pct),
            ]
        })
        .collect();
    table(&[label, "Frequency", "Share of Jobs"], &rows)
}

fn count_table(entries: &[CountEntry], label: &str) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| vec![e.value.clone(), e.count.to_string()])
        .collect();
    table(&[label, "Frequency"], &rows)
}

fn keyword_tags(keywords: &[String], model: bool) -> String {
    let class = if model { "keyword-tag model" } else { "keyword-tag" };
    keywords
        .iter()
        .map(|k| format!("<span class=\"{}\">{}</span>", class, escape_html(k)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn top_n(entries: &[CountEntry], n: usize) -> Vec<CountEntry> {
    entries.iter().take(n).cloned().collect()
}

fn top_freq(entries: &[FreqEntry], n: usize) -> Vec<FreqEntry> {
    entries.iter().take(n).cloned().collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}…")
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn slug(kind: &str) -> String {
    kind.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

fn fmt_f64(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

fn fmt_money(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_grouping() {
        assert_eq!(fmt_money(500000.0), "500,000");
        assert_eq!(fmt_money(1234567.4), "1,234,567");
        assert_eq!(fmt_money(999.0), "999");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("안녕하세요 반갑습니다", 5), "안녕하세요…");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn title_case_from_snake() {
        assert_eq!(title_case("shoot_types"), "Shoot Types");
        assert_eq!(title_case("usages"), "Usages");
    }
}
