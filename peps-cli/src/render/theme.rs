use peps_core::ReviewTag;
use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Dark palette; tag colors follow the review list badges.
pub struct ReviewTheme;

impl ReviewTheme {
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(ReviewTheme::FG);
        skin.italic.set_fg(ReviewTheme::COMMENT);
        skin.bold.set_fg(ReviewTheme::YELLOW);

        skin.headers[0].set_fg(ReviewTheme::RED);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(ReviewTheme::BLUE);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(ReviewTheme::COMMENT);
        skin.bullet.set_fg(ReviewTheme::GREEN);
        skin.inline_code.set_fg(ReviewTheme::GREEN);
        skin.inline_code.set_bg(ReviewTheme::BG);

        skin
    }

    pub fn tag_color(tag: ReviewTag) -> Color {
        match tag {
            ReviewTag::Cancelled => ReviewTheme::GREY,
            ReviewTag::Attendance | ReviewTag::Incomplete => ReviewTheme::RED,
            ReviewTag::Notes => ReviewTheme::YELLOW,
        }
    }

    pub const BG: Color = Color::Rgb {
        r: 0x28,
        g: 0x2C,
        b: 0x34,
    }; // #282C34
    pub const FG: Color = Color::Rgb {
        r: 0xAB,
        g: 0xB2,
        b: 0xBF,
    }; // #ABB2BF
    pub const RED: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const BLUE: Color = Color::Rgb {
        r: 0x61,
        g: 0xAF,
        b: 0xEF,
    }; // #61AFEF
    pub const GREY: Color = Color::Rgb {
        r: 0x8A,
        g: 0x8A,
        b: 0x8A,
    }; // #8A8A8A
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370
}
