pub mod dashboard {
    pub mod analytics_tab;
    pub mod connections_tab;
    pub mod overview_tab;
    pub mod reports_tab;
}
pub mod bar_list;
pub mod common_toast;
pub mod form_field;
pub mod loading;
pub mod metric_card;
pub mod sidebar;
