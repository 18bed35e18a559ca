//! Consolidated Markdown report.

use prism_analysis::pipeline::AnalysisBundle;

/// Render the consolidated report as Markdown.
pub fn consolidated_markdown(bundle: &AnalysisBundle, title: &str) -> String {
    let summary = &bundle.summary;
    let mut md = String::with_capacity(8192);

    md.push_str(&format!("# {}\n\n", escape_header(title)));
    md.push_str(&format!("**Generated:** {}\n\n---\n\n", bundle.generated_at));

    // Executive summary.
    md.push_str("## Executive Summary\n\n### Key Metrics\n\n");
    md.push_str("| Metric | Count |\n|--------|------:|\n");
    md.push_str(&format!("| **Total Jobs** | {} |\n", summary.unique_jobs));
    md.push_str(&format!("| **Total Bookings** | {} |\n", summary.total_bookings));
    md.push_str(&format!("| **Unique Models** | {} |\n", summary.unique_models));
    md.push_str(&format!("| **Unique Clients** | {} |\n", summary.unique_clients));
    md.push_str(&format!("| **Unique Brands** | {} |\n\n", summary.unique_brands));

    if let Some(region) = summary.top_regions.first() {
        md.push_str(&format!(
            "- **Primary Region:** {} ({} jobs)\n",
            region.value, region.count
        ));
    }
    if let Some(nationality) = summary.top_nationalities.first() {
        md.push_str(&format!(
            "- **Most Common Model Nationality:** {} ({} bookings)\n",
            nationality.value, nationality.count
        ));
    }
    if let Some(hours) = summary.avg_shoot_hours {
        md.push_str(&format!("- **Average Shoot Duration:** {hours:.1} hours\n"));
    }
    if let Some(price) = summary.avg_price_client {
        md.push_str(&format!("- **Average Client Budget:** ₩{price:.0}\n"));
    }
    if let Some(price) = summary.avg_price_talent {
        md.push_str(&format!("- **Average Talent Payment:** ₩{price:.0}\n"));
    }
    md.push_str("\n---\n\n");

    // Booking patterns.
    md.push_str("## Booking Patterns\n\n");
    for field in &bundle.patterns.fields {
        if field.entries.is_empty() {
            continue;
        }
        md.push_str(&format!("### {}\n\n", escape_header(&field.field)));
        md.push_str("| Value | Frequency | Share |\n|-------|----------:|------:|\n");
        for entry in field.entries.iter().take(10) {
            md.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                escape_cell(&entry.value),
                entry.count,
                entry.pct
            ));
        }
        md.push('\n');
    }

    for combo in &bundle.patterns.combos {
        if combo.entries.is_empty() {
            continue;
        }
        md.push_str(&format!("### Top {}\n\n", escape_header(&combo.kind)));
        md.push_str("| Combination | Frequency |\n|-------------|----------:|\n");
        for entry in combo.entries.iter().take(10) {
            md.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&entry.value),
                entry.count
            ));
        }
        md.push('\n');
    }

    if !bundle.patterns.numeric.is_empty() {
        md.push_str("### Numeric Summaries\n\n");
        md.push_str("| Metric | Count | Mean | Median | Min | Max |\n");
        md.push_str("|--------|------:|-----:|-------:|----:|----:|\n");
        for s in &bundle.patterns.numeric {
            md.push_str(&format!(
                "| {} | {} | {:.1} | {:.1} | {:.1} | {:.1} |\n",
                escape_cell(&s.metric),
                s.count,
                s.mean,
                s.median,
                s.min,
                s.max
            ));
        }
        md.push('\n');
    }

    if !bundle.patterns.monthly.is_empty() {
        md.push_str("### Monthly Trend\n\n| Month | Jobs |\n|-------|-----:|\n");
        for month in &bundle.patterns.monthly {
            md.push_str(&format!("| {} | {} |\n", month.month, month.jobs));
        }
        md.push('\n');
    }
    md.push_str("---\n\n");

    // Vocabulary.
    md.push_str("## Customer Vocabulary\n\n");
    if !bundle.vocabulary.top_phrases.is_empty() {
        md.push_str("### Top Inquiry Phrases\n\n");
        md.push_str("| Phrase | English | Frequency |\n|--------|---------|----------:|\n");
        for phrase in bundle.vocabulary.top_phrases.iter().take(15) {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&phrase.value),
                escape_cell(phrase.gloss.as_deref().unwrap_or("")),
                phrase.count
            ));
        }
        md.push('\n');
    }
    if !bundle.vocabulary.top_job_names.is_empty() {
        md.push_str("### Top Job Names\n\n");
        md.push_str("| Job Name | English | Frequency |\n|----------|---------|----------:|\n");
        for name in bundle.vocabulary.top_job_names.iter().take(15) {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&name.value),
                escape_cell(name.gloss.as_deref().unwrap_or("")),
                name.count
            ));
        }
        md.push('\n');
    }
    md.push_str("---\n\n");

    // VOC.
    if let Some(ref voc) = bundle.voc {
        md.push_str("## Voice of Customer\n\n");
        md.push_str("| Theme | Entries | Share | Sentences |\n|-------|--------:|------:|----------:|\n");
        for theme in &voc.theme_summaries {
            md.push_str(&format!(
                "| {} | {} | {:.1}% | {} |\n",
                escape_cell(&theme.theme),
                theme.entry_count,
                theme.share_pct,
                theme.sentence_count
            ));
        }
        md.push('\n');

        for theme in &voc.theme_summaries {
            if theme.samples.is_empty() {
                continue;
            }
            md.push_str(&format!("### {}\n\n", escape_header(&theme.theme)));
            for sample in &theme.samples {
                md.push_str(&format!(
                    "> {} — *{}, {}*\n\n",
                    escape_cell(&sample.sentence),
                    escape_cell(&sample.category),
                    escape_cell(&sample.user_type)
                ));
            }
        }
        md.push_str("---\n\n");
    }

    // Keywords.
    if let Some(ref keywords) = bundle.keywords {
        md.push_str("## Concept Keywords\n\n");
        if !keywords.top_job_keywords.is_empty() {
            md.push_str("| Keyword | Frequency |\n|---------|----------:|\n");
            for keyword in &keywords.top_job_keywords {
                md.push_str(&format!(
                    "| {} | {} |\n",
                    escape_cell(&keyword.value),
                    keyword.count
                ));
            }
            md.push('\n');
        }
        md.push_str(&format!(
            "{} jobs processed; the full per-job keyword table is exported as CSV.\n\n",
            keywords.jobs.len()
        ));
    }

    md
}

/// Escape markdown injection in headers.
fn escape_header(s: &str) -> String {
    s.replace('#', "\\#").replace('\n', " ").replace('\r', "")
}

/// Keep table cells on one line and pipes literal.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
