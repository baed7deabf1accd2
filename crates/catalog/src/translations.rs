//! 內建的範本翻譯表。 / The built-in template translations, compiled into the tools.
//!
//! Only a handful of templates have hand-maintained translations; everything
//! else falls back to the source-language reference text and is marked for a
//! human translator.

/// 範本翻譯表：鍵與譯文的有序對照。 / A translation table: ordered key/text pairs.
pub type TranslationTable = &'static [(&'static str, &'static str)];

const ZH_R_CN: TranslationTable = &[
    ("TPL_system_message", "[系统信息]\n{{Message}}"),
    (
        "TPL_battery",
        "[电池监控]\n电池电量: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[发送 USSD]\n{{Content}}"),
];

const ZH_R_TW: TranslationTable = &[
    ("TPL_system_message", "[系統資訊]\n{{Message}}"),
    (
        "TPL_battery",
        "[電池監控]\n電池電量: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[傳送 USSD]\n{{Content}}"),
];

const ZH_R_HK: TranslationTable = &[
    ("TPL_system_message", "[系統資訊]\n{{Message}}"),
    (
        "TPL_battery",
        "[電池監控]\n電池電量: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[傳送 USSD]\n{{Content}}"),
    ("TPL_receiving_call", "[{{SIM}}接聽來電]\n來自: {{From}}"),
];

const YUE_R_CN: TranslationTable = &[
    ("TPL_system_message", "[系统信息]\n{{Message}}"),
    (
        "TPL_battery",
        "[电池监控]\n电池电量: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[发送 USSD]\n{{Content}}"),
];

const YUE_R_HK: TranslationTable = &[
    ("TPL_system_message", "[系統資訊]\n{{Message}}"),
    (
        "TPL_battery",
        "[電池監控]\n電池電量: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[傳送 USSD]\n{{Content}}"),
    ("TPL_receiving_call", "[{{SIM}}接聽嚟電]\n來自: {{From}}"),
];

const JA_R_JP: TranslationTable = &[
    ("TPL_system_message", "[システム情報]\n{{Message}}"),
    (
        "TPL_battery",
        "[バッテリー監視]\nバッテリーレベル: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[USSD送信]\n{{Content}}"),
];

const ES_R_ES: TranslationTable = &[
    ("TPL_system_message", "[Información del Sistema]\n{{Message}}"),
    (
        "TPL_battery",
        "[Monitoreo de Batería]\nNivel de batería: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[Enviar USSD]\n{{Content}}"),
];

const RU: TranslationTable = &[
    ("TPL_system_message", "[Системная информация]\n{{Message}}"),
    (
        "TPL_battery",
        "[Мониторинг батареи]\nУровень батареи: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[Отправить USSD]\n{{Content}}"),
];

const VI: TranslationTable = &[
    ("TPL_system_message", "[Thông tin hệ thống]\n{{Message}}"),
    (
        "TPL_battery",
        "[Giám sát pin]\nMức pin: {{BatteryLevel}}%\n{{Message}}",
    ),
    ("TPL_send_USSD_chat", "[Gửi USSD]\n{{Content}}"),
];

/// 擁有內建翻譯的語言包，依處理順序排列。 / The packs with built-in translations, in
/// the order the formatter processes them.
pub const TRANSLATED_PACKS: [&str; 9] = [
    "zh-rCN", "zh-rTW", "zh-rHK", "yue-rCN", "yue-rHK", "ja-rJP", "es-rES", "ru", "vi",
];

/// 格式化工具會補上翻譯的範本鍵。 / The template keys the formatter backfills when a
/// translation exists for the pack.
pub const TRANSLATED_TEMPLATE_KEYS: [&str; 4] = [
    "TPL_system_message",
    "TPL_battery",
    "TPL_send_USSD_chat",
    "TPL_receiving_call",
];

/// 取得語言代碼對應的翻譯表；未知語言回傳空表。 / Returns the table for a language code;
/// unknown codes yield an empty table.
pub fn translations_for(code: &str) -> TranslationTable {
    match code {
        "zh-rCN" => ZH_R_CN,
        "zh-rTW" => ZH_R_TW,
        "zh-rHK" => ZH_R_HK,
        "yue-rCN" => YUE_R_CN,
        "yue-rHK" => YUE_R_HK,
        "ja-rJP" => JA_R_JP,
        "es-rES" => ES_R_ES,
        "ru" => RU,
        "vi" => VI,
        _ => &[],
    }
}

/// 查詢表中指定鍵的譯文。 / Looks up a key in a translation table.
pub fn lookup<'t>(table: &[(&'t str, &'t str)], name: &str) -> Option<&'t str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pack_resolves_its_table() {
        let table = translations_for("ja-rJP");
        assert_eq!(
            lookup(table, "TPL_send_USSD_chat"),
            Some("[USSD送信]\n{{Content}}")
        );
    }

    #[test]
    fn unknown_pack_has_no_translations() {
        assert!(translations_for("de").is_empty());
        assert_eq!(lookup(translations_for("de"), "TPL_battery"), None);
    }

    #[test]
    fn every_translated_pack_has_a_table() {
        for code in TRANSLATED_PACKS {
            assert!(!translations_for(code).is_empty(), "{code} must have a table");
        }
    }

    #[test]
    fn tables_only_carry_known_template_keys() {
        for code in TRANSLATED_PACKS {
            for (key, _) in translations_for(code) {
                assert!(
                    TRANSLATED_TEMPLATE_KEYS.contains(key),
                    "{code} table has unexpected key {key}"
                );
            }
        }
    }
}
