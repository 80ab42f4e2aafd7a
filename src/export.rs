//! Presentation adapters that turn a [`BoardView`] into plain text or HTML.

use crate::domain::{escape_html, BoardView, TaskStatus};
use std::fmt::Write;

/// Plain-text listing for `taskflow list`, optionally a single column
pub fn render_text(view: &BoardView, only: Option<TaskStatus>) -> String {
    let mut out = String::new();

    for bucket in view.buckets.iter().filter(|b| only.map_or(true, |s| b.status == s)) {
        let _ = writeln!(out, "{} ({})", bucket.status.title(), bucket.count());
        match bucket.hint() {
            Some(hint) => {
                let _ = writeln!(out, "  {}", hint);
            }
            None => {
                for card in &bucket.cards {
                    let _ = writeln!(out, "  [#{}] {}", card.id, card.text);
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Standalone HTML page of the board. All task text is escaped.
pub fn render_html(view: &BoardView) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Task Flow</title>\n");
    out.push_str(
        "<style>body{font-family:sans-serif;display:flex;gap:1rem}\
         section{flex:1;background:#f4f4f4;padding:.5rem;border-radius:6px}\
         .task{background:#fff;margin:.4rem 0;padding:.4rem;border-radius:4px}\
         .empty{color:#888;font-style:italic}</style>\n",
    );
    out.push_str("</head>\n<body>\n");

    for bucket in &view.buckets {
        let status = bucket.status.to_tag();
        let _ = writeln!(out, "<section class=\"column\" data-status=\"{}\">", status);
        let _ = writeln!(
            out,
            "<h2>{} <span class=\"count\" id=\"{}-count\">{}</span></h2>",
            escape_html(bucket.status.title()),
            status,
            bucket.count()
        );

        match bucket.hint() {
            Some(hint) => {
                let _ = writeln!(out, "<p class=\"empty\">{}</p>", escape_html(hint));
            }
            None => {
                for card in &bucket.cards {
                    let _ = writeln!(
                        out,
                        "<div class=\"task\" data-id=\"{}\">{}</div>",
                        card.id,
                        card.html_text()
                    );
                }
            }
        }

        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TaskStatus};

    fn sample_view() -> BoardView {
        BoardView::project(&[
            Task::new(1, "<script>alert(1)</script>".to_string(), TaskStatus::Todo),
            Task::new(2, "Tom & Jerry".to_string(), TaskStatus::Done),
        ])
    }

    #[test]
    fn test_render_html_escapes_task_text() {
        let html = render_html(&sample_view());

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_render_html_counts_and_hints() {
        let html = render_html(&sample_view());

        assert!(html.contains("id=\"todo-count\">1<"));
        assert!(html.contains("id=\"in_progress-count\">0<"));
        assert!(html.contains("id=\"done-count\">1<"));
        assert!(html.contains(TaskStatus::InProgress.empty_hint()));
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_view(), None);

        assert!(text.starts_with("To Do (1)\n  [#1] <script>alert(1)</script>\n"));
        assert!(text.contains("In Progress (0)\n  Drag a task here"));
        assert!(text.contains("Done (1)\n  [#2] Tom & Jerry\n"));
    }

    #[test]
    fn test_render_text_single_column() {
        let text = render_text(&sample_view(), Some(TaskStatus::Done));
        assert_eq!(text, "Done (1)\n  [#2] Tom & Jerry\n\n");
    }
}
