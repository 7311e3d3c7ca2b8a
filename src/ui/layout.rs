use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ExamLayout {
    pub header_area: Rect,
    pub status_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub navigator_area: Rect,
    pub help_area: Rect,
}

pub struct ResultsLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub review_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_exam_chunks(area: Rect) -> ExamLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Percentage(40),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    ExamLayout {
        header_area: chunks[0],
        status_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        navigator_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_results_chunks(area: Rect) -> ResultsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    ResultsLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        review_area: chunks[2],
        help_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_exam_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 3);
        assert_eq!(layout.navigator_area.height, 4);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.question_area.height >= 4);
        assert!(layout.options_area.height > 0);
    }

    #[test]
    fn test_results_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_results_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.score_area.height, 6);
        assert_eq!(layout.help_area.height, 3);
        // margin 1 top+bottom, fixed rows 12: the review gets the rest
        assert_eq!(layout.review_area.height, 98 - 12);
    }

    #[test]
    fn test_exam_layout_small_terminal() {
        let area = Rect::new(0, 0, 40, 20);
        let layout = calculate_exam_chunks(area);
        assert_eq!(layout.header_area.height, 3);
        assert!(layout.help_area.height <= 3);
    }
}
