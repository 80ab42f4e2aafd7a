use super::enums::TaskStatus;
use super::task::Task;

/// One card as it appears in a column
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u64,
    /// Text as entered, for adapters that do not interpret markup
    pub text: String,
}

impl CardView {
    /// Text escaped for insertion into an HTML document
    pub fn html_text(&self) -> String {
        escape_html(&self.text)
    }
}

/// Tasks sharing one status, in list order
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub status: TaskStatus,
    pub cards: Vec<CardView>,
}

impl Bucket {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Hint to draw when there are no cards, `None` otherwise
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(self.status.empty_hint())
        } else {
            None
        }
    }
}

/// Everything a presentation layer needs to draw the board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub buckets: [Bucket; 3],
}

impl BoardView {
    /// Group tasks into the three columns.
    ///
    /// Stable: cards keep the relative order they have in `tasks`. The result
    /// depends only on `tasks`, so projecting unchanged input twice yields
    /// equal views.
    pub fn project(tasks: &[Task]) -> Self {
        let buckets = TaskStatus::all().map(|status| Bucket {
            status,
            cards: tasks
                .iter()
                .filter(|t| t.status == status)
                .map(|t| CardView {
                    id: t.id,
                    text: t.text.clone(),
                })
                .collect(),
        });

        Self { buckets }
    }

    pub fn bucket(&self, status: TaskStatus) -> &Bucket {
        &self.buckets[status.index()]
    }

    /// Per-column counts as (todo, in_progress, done)
    #[cfg(test)]
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.buckets[0].count(),
            self.buckets[1].count(),
            self.buckets[2].count(),
        )
    }
}

/// Escape text for safe insertion into HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
