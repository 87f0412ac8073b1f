use super::session::EditMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Zh,
}

impl Lang {
    /// One-shot detection of the system locale at startup.
    pub fn detect() -> Lang {
        sys_locale::get_locale()
            .as_deref()
            .map_or(Lang::En, Lang::from_tag)
    }

    pub fn from_tag(tag: &str) -> Lang {
        if tag.starts_with("zh") {
            Lang::Zh
        } else {
            Lang::En
        }
    }
}

/// Static label bundle. Labels only; data format and behavior are identical
/// in both languages.
pub struct Texts {
    pub title: &'static str,
    pub load_csv: &'static str,
    pub symbol: &'static str,
    pub mode: &'static str,
    pub mode_add: &'static str,
    pub mode_delete: &'static str,
    pub file_prompt: &'static str,
    pub load_failed: &'static str,
    pub save_failed: &'static str,
}

static EN: Texts = Texts {
    title: "CSV Star/Circle Editor",
    load_csv: "Load CSV",
    symbol: "Symbol:",
    mode: "Mode:",
    mode_add: "Add",
    mode_delete: "Delete",
    file_prompt: "Select CSV File",
    load_failed: "Could not load file",
    save_failed: "Could not save file",
};

static ZH: Texts = Texts {
    title: "CSV 星星/圆圈编辑器",
    load_csv: "导入CSV",
    symbol: "图案:",
    mode: "模式:",
    mode_add: "添加",
    mode_delete: "删除",
    file_prompt: "选择CSV文件",
    load_failed: "无法加载文件",
    save_failed: "无法保存文件",
};

impl Texts {
    pub fn for_lang(lang: Lang) -> &'static Texts {
        match lang {
            Lang::En => &EN,
            Lang::Zh => &ZH,
        }
    }

    pub fn mode_label(&self, mode: EditMode) -> &'static str {
        match mode {
            EditMode::Add => self.mode_add,
            EditMode::Delete => self.mode_delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_tags_select_zh() {
        assert_eq!(Lang::from_tag("zh"), Lang::Zh);
        assert_eq!(Lang::from_tag("zh-CN"), Lang::Zh);
        assert_eq!(Lang::from_tag("zh-Hant-TW"), Lang::Zh);
    }

    #[test]
    fn test_everything_else_selects_en() {
        assert_eq!(Lang::from_tag("en-US"), Lang::En);
        assert_eq!(Lang::from_tag("de-DE"), Lang::En);
        assert_eq!(Lang::from_tag(""), Lang::En);
    }

    #[test]
    fn test_mode_labels_follow_bundle() {
        let en = Texts::for_lang(Lang::En);
        assert_eq!(en.mode_label(EditMode::Add), "Add");
        assert_eq!(en.mode_label(EditMode::Delete), "Delete");

        let zh = Texts::for_lang(Lang::Zh);
        assert_eq!(zh.mode_label(EditMode::Add), "添加");
        assert_eq!(zh.mode_label(EditMode::Delete), "删除");
    }
}
