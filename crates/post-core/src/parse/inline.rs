use crate::types::{ContentElement, RunStyle, StyleRun};

/// Accumulates styled text pushes into a run list, collapsing whitespace
/// and merging adjacent pushes that share a style.
pub(crate) struct RunBuilder {
    runs: Vec<StyleRun>,
    last_was_space: bool,
    started: bool,
}

impl RunBuilder {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::new(),
            last_was_space: false,
            started: false,
        }
    }

    pub(crate) fn push_text(&mut self, raw: &str, style: &RunStyle) {
        for ch in raw.chars() {
            let Some(ch) = clean_char(ch) else {
                continue;
            };
            if ch.is_whitespace() {
                if self.started && !self.last_was_space {
                    self.emit(' ', style);
                    self.last_was_space = true;
                }
                continue;
            }
            self.emit(ch, style);
            self.started = true;
            self.last_was_space = false;
        }
    }

    /// A `<br>`: hard line break inside the current run.
    pub(crate) fn push_break(&mut self, style: &RunStyle) {
        if !self.started {
            return;
        }
        self.trim_trailing_space();
        self.emit('\n', style);
        self.last_was_space = true;
    }

    fn emit(&mut self, ch: char, style: &RunStyle) {
        match self.runs.last_mut() {
            Some(last) if last.style == *style => last.text.push(ch),
            _ => self.runs.push(StyleRun {
                text: ch.to_string(),
                style: style.clone(),
            }),
        }
    }

    fn trim_trailing_space(&mut self) {
        loop {
            match self.runs.last_mut() {
                Some(last) => {
                    while last.text.ends_with(' ') {
                        last.text.pop();
                    }
                    if !last.text.is_empty() {
                        return;
                    }
                }
                None => return,
            }
            self.runs.pop();
        }
    }

    pub(crate) fn finish(&mut self) -> Vec<StyleRun> {
        self.last_was_space = false;
        self.started = false;
        let mut runs = std::mem::take(&mut self.runs);
        loop {
            match runs.last_mut() {
                Some(last) => {
                    let kept = last.text.trim_end().len();
                    last.text.truncate(kept);
                    if !last.text.is_empty() {
                        break;
                    }
                }
                None => break,
            }
            runs.pop();
        }
        merge_runs(runs)
    }

    pub(crate) fn flush_into(&mut self, out: &mut Vec<ContentElement>) {
        let runs = self.finish();
        if !runs.is_empty() {
            out.push(ContentElement::Text(runs));
        }
    }
}

/// Drops empty runs and joins consecutive runs with equal styles.
pub(crate) fn merge_runs(runs: Vec<StyleRun>) -> Vec<StyleRun> {
    let mut merged: Vec<StyleRun> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}

/// Whitespace-collapsed plain text, for captions and labels.
pub(crate) fn collapse_text(raw: &str) -> String {
    let mut builder = RunBuilder::new();
    builder.push_text(raw, &RunStyle::default());
    let mut out = String::new();
    for run in builder.finish() {
        out.push_str(&run.text);
    }
    out
}

fn clean_char(ch: char) -> Option<char> {
    match ch {
        '\u{00A0}' => Some(' '),
        '\r' | '\u{00AD}' | '\u{200B}'..='\u{200F}' | '\u{FEFF}' => None,
        _ => Some(ch),
    }
}
