use std::collections::BTreeSet;

use langpack_resources::ResourceDocument;

/// 一個分類：輸出檔名與其鍵清單。 / One category: the output file name plus its key list.
/// Keys are listed alphabetically; output files follow this order.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub file_name: &'static str,
    pub keys: &'static [&'static str],
}

/// 內建的字串分類表。 / The built-in categorisation of the app's string keys.
const BUILTIN_CATEGORIES: &[Category] = &[
    Category {
        file_name: "strings.xml",
        keys: &["Lang", "time_format"],
    },
    Category {
        file_name: "strings_battery.xml",
        keys: &[
            "battery_low",
            "battery_monitoring",
            "battery_monitoring_notify",
            "battery_title",
            "charger_connect",
            "charger_disconnect",
            "charger_status",
            "charging",
            "current_battery_level",
            "low_battery_status_end",
            "not_charging",
        ],
    },
    Category {
        file_name: "strings_telegram.xml",
        keys: &[
            "available_command",
            "bot_token",
            "chat_command",
            "chat_command_service_name",
            "chat_id",
            "chat_id_or_token_not_config",
            "connect_wait_message",
            "connect_wait_title",
            "get_recent_chat_id",
            "get_recent_chat_message",
            "get_recent_chat_title",
            "get_spam_sms",
            "message_thread_id",
            "no_spam_history",
            "select_chat",
            "send_ussd_command",
            "send_ussd_dual_command",
            "sendsms",
            "sendsms_dual",
            "set_api_title",
            "spam_count_title",
            "success_connect",
            "test_and_save",
            "token_not_configure",
            "unable_get_recent",
            "unknown_command",
            "using_privacy_mode",
        ],
    },
    Category {
        file_name: "strings_sms.xml",
        keys: &[
            "display_sim_card_alias_in_dual_card_mode",
            "enter_content",
            "enter_number",
            "enter_reply_content",
            "enter_reply_number",
            "failed_resend",
            "keywords",
            "listsms_command",
            "listsms_inbox_command",
            "network_error_falls_back_to_sms",
            "next_page",
            "not_default_sms_app",
            "please_reply_to_continue",
            "prev_page",
            "receive_mms_title",
            "receive_sms_title",
            "send_sms_title",
            "sms_content",
            "sms_date",
            "sms_delete_confirm",
            "sms_delete_failed",
            "sms_deleted",
            "sms_detail_header",
            "sms_from",
            "sms_list_empty",
            "sms_list_header",
            "sms_not_found",
            "sms_to",
            "sms_type_all",
            "sms_type_inbox",
            "sms_type_sent",
            "spam_keyword_add_title",
            "spam_keyword_edit_title",
            "spam_sms_keyword_title",
            "template_title",
            "this_is_a_test_message",
            "trusted_phone_number",
            "trusted_phone_number_empty",
            "unable_get_phone_number",
            "unable_to_obtain_information",
            "using_verification_code_identification",
            "verification_code",
        ],
    },
    Category {
        file_name: "strings_call.xml",
        keys: &[
            "Incoming_number",
            "call_notify",
            "hide_phone_number",
            "missed_call_title",
            "receive_call_title",
            "receiving_call_title",
        ],
    },
    Category {
        file_name: "strings_ussd.xml",
        keys: &[
            "enter_ussd_code",
            "invalid_ussd_code",
            "send_ussd_title",
            "ussd_code_running",
        ],
    },
    Category {
        file_name: "strings_network.xml",
        keys: &[
            "airplane_mode",
            "current_network_connection_status",
            "doh_over_socks5",
            "no_network",
            "no_service_available",
            "proxy_dialog_title",
            "proxy_enable",
            "proxy_host",
            "proxy_password",
            "proxy_port",
            "proxy_title",
            "proxy_username",
            "using_doh",
        ],
    },
    Category {
        file_name: "strings_cc.xml",
        keys: &[
            "add_cc_service",
            "cc_service_config_title",
            "cc_service_disabled",
            "cc_service_enabled",
            "copy_notification_menu",
            "edit_cc_service",
        ],
    },
    Category {
        file_name: "strings_notification.xml",
        keys: &[
            "Notification_Listener_title",
            "app_name_title",
            "receive_notification_title",
            "set_notification_listener",
            "title",
        ],
    },
    Category {
        file_name: "strings_scanner.xml",
        keys: &[
            "an_error_occurred_while_decrypting_the_configuration",
            "an_error_occurred_while_getting_the_configuration",
            "configuration_sent_successfully",
            "error_id_cannot_be_empty",
            "error_id_must_be_9_characters",
            "error_password_cannot_be_empty",
            "error_password_must_be_6_characters",
            "getting_configuration",
            "invalid_json_structure",
            "no_camera_permission",
            "no_entries_available",
            "please_enter_your_info",
            "please_enter_your_password",
            "qrcode_notice",
            "scan_title",
            "sending_configuration",
            "transfer_configuration",
        ],
    },
    Category {
        file_name: "strings_privacy_about.xml",
        keys: &[
            "about_content",
            "about_title",
            "agree",
            "browser_not_found",
            "check_update",
            "decline",
            "donate",
            "privacy_policy",
            "privacy_reminder_information",
            "privacy_reminder_title",
            "update_dialog_body",
            "update_dialog_no",
            "update_dialog_ok",
            "update_dialog_title",
            "user_manual",
            "visit_page",
        ],
    },
    Category {
        file_name: "strings_common.xml",
        keys: &[
            "app_list",
            "cancel_button",
            "delete_button",
            "error_title",
            "failed_to_get_information",
            "logcat",
            "no_logs",
            "no_service_available",
            "ok_button",
            "request",
            "reset_button",
            "restart_service",
            "send_button",
            "send_failed",
            "sending",
            "service_is_running",
            "status",
            "success",
            "system_message_head",
            "time",
        ],
    },
];

/// 分類綱要：依序排列的分類清單。 / The categorisation schema: an ordered list of categories.
/// Immutable once constructed; injected into [`categorize`] as a parameter.
#[derive(Debug, Clone)]
pub struct CategorySchema {
    categories: Vec<Category>,
}

impl CategorySchema {
    /// 內建於工具中的分類綱要。 / The schema compiled into the tools.
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN_CATEGORIES.to_vec(),
        }
    }

    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

/// 單一分類的輸出檔。 / The output file produced for one category.
#[derive(Debug, Clone)]
pub struct CategorizedFile {
    pub file_name: &'static str,
    pub document: ResourceDocument,
}

/// 分類結果：每個非空分類一個輸出文件，以及未分類的鍵。 / The partition result: one document
/// per non-empty category plus the keys no category claimed.
#[derive(Debug, Clone, Default)]
pub struct Categorized {
    pub files: Vec<CategorizedFile>,
    pub uncategorized: BTreeSet<String>,
}

/// 依綱要將文件分割為分類輸出。 / Partitions a document according to the schema.
///
/// Entries are emitted in the schema's key order, not the input order, so the
/// output is reproducible. Keys the document lacks are skipped silently; a key
/// claimed by two categories lands in both outputs. Keys no category claims
/// are collected for the caller to surface as a warning.
pub fn categorize(document: &ResourceDocument, schema: &CategorySchema) -> Categorized {
    let mut assigned: BTreeSet<&str> = BTreeSet::new();
    let mut files = Vec::new();

    for category in schema.iter() {
        let mut output = ResourceDocument::new();
        for key in category.keys {
            if let Some(entry) = document.get(key) {
                output.push(entry.clone());
                assigned.insert(key);
            }
        }
        if !output.is_empty() {
            files.push(CategorizedFile {
                file_name: category.file_name,
                document: output,
            });
        }
    }

    let uncategorized = document
        .keys()
        .filter(|key| !assigned.contains(key))
        .map(str::to_string)
        .collect();

    Categorized {
        files,
        uncategorized,
    }
}
