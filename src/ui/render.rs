// render.rs - plain-text views of session state
use std::fmt::{self, Display, Formatter};

use super::{Outcome, Sample, Session, SummaryReport};
use crate::summarizer::{GenerationParams, HealthStatus, SummarizationResult, SummarizerError};
use crate::text::{char_len, preview};

const RULE: &str = "────────────────────────────────────────";

impl Display for HealthStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.healthy {
            writeln!(f, "✅ API is up")?;
        } else {
            writeln!(f, "❌ API unavailable")?;
        }
        let info = serde_json::to_string_pretty(&self.info).map_err(|_| fmt::Error)?;
        writeln!(f, "{info}")?;
        if !self.healthy {
            writeln!(f, "Start the API server first, then run `health` again.")?;
        }
        Ok(())
    }
}

impl Display for GenerationParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max length:  {}", self.max_new_tokens())?;
        writeln!(f, "Temperature: {}", self.temperature())?;
        writeln!(f, "Top-p:       {}", self.top_p())
    }
}

/// The statistics column shown next to every summary
struct Stats<'a>(&'a SummarizationResult);

impl Display for Stats<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "⏱️  Processing time: {}s", result.processing_time)?;
        writeln!(f, "📏 Original length: {} chars", result.input_length)?;
        writeln!(f, "📏 Summary length:  {} chars", result.output_length)?;
        match result.compression_ratio() {
            Some(ratio) => writeln!(f, "📉 Compression:     {ratio:.1}%"),
            None => writeln!(f, "📉 Compression:     n/a"),
        }
    }
}

impl Display for SummaryReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ Summary complete!")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Original ({} chars):", char_len(&self.document))?;
        writeln!(f, "{}", self.document)?;
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "{}", self.result.summary)?;
        writeln!(f, "{RULE}")?;
        write!(f, "{}", Stats(&self.result))?;
        writeln!(f, "{RULE}")?;
        write!(f, "{}", self.params)?;
        writeln!(f, "Time:        {}", self.finished_at.format("%H:%M:%S"))
    }
}

pub struct ErrorBanner<'a>(pub &'a SummarizerError);

impl Display for ErrorBanner<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let err = self.0;
        match err {
            _ if err.is_warning() => writeln!(f, "⚠️  {err}"),
            SummarizerError::ServerError { status, body } => {
                writeln!(f, "❌ API error: {status}")?;
                writeln!(f, "{body}")
            }
            _ => writeln!(f, "❌ {err}"),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Summarized(report) => write!(f, "{report}"),
            Outcome::Inferred { summary, .. } => {
                writeln!(f, "✅ Summary complete!")?;
                writeln!(f, "📄 Result:")?;
                writeln!(f, "{summary}")
            }
            Outcome::Demo(result) => {
                writeln!(f, "🎯 Demo result")?;
                writeln!(f, "{RULE}")?;
                writeln!(f, "Summary:")?;
                writeln!(f, "{}", result.summary)?;
                writeln!(f, "{RULE}")?;
                write!(f, "{}", Stats(result))
            }
            Outcome::Failed(err) => write!(f, "{}", ErrorBanner(err)),
        }
    }
}

/// The sample catalog with short previews
pub struct SampleList;

impl Display for SampleList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for sample in Sample::ALL {
            writeln!(f, "{:<11} {}", sample.key(), sample.title())?;
            writeln!(f, "            {}…", preview(sample.text(), 72))?;
        }
        Ok(())
    }
}

/// Whole-screen view of a session
pub struct SessionView<'a>(pub &'a Session);

impl Display for SessionView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let session = self.0;
        match session.health() {
            Some(health) => write!(f, "{health}")?,
            None => writeln!(f, "API status unknown, run `health`")?,
        }
        writeln!(f, "{RULE}")?;
        write!(f, "{}", session.params())?;
        writeln!(f, "{RULE}")?;

        let document = session.document();
        if document.trim().is_empty() {
            writeln!(f, "No document yet. Use `text`, `paste`, `sample` or `file`.")?;
        } else {
            writeln!(f, "Document ({} chars): {}…", char_len(document), preview(document, 80))?;
        }

        if let Some(demo) = session.demo_result() {
            writeln!(f, "{RULE}")?;
            write!(f, "{}", Outcome::Demo(demo.clone()))?;
        }
        if let Some(last) = session.last_outcome() {
            if !matches!(last, Outcome::Demo(_)) {
                writeln!(f, "{RULE}")?;
                write!(f, "{last}")?;
            }
        }
        Ok(())
    }
}
