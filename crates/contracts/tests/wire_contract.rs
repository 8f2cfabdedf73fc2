//! Structural contract tests for the wire records.
//!
//! These exercise the records only through JSON, the way a frontend sees
//! them: required keys, nullable keys, shared company fields, role
//! universes and lossless round trips.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use firmdesk_contracts::{
    codec, ChatDTO, ClientDTO, CompanyExtended, CompanyProfile, ComplianceFlags, EngagementDTO,
    EngagementTaskDTO, FileDTO, FirmDTO, FirmLightDTO, FirmRole, FirmSettingsDTO, FirmUserDTO,
    KeycloakUserDTO, MessageDTO, MessageStreamDTO, PermissionUserDTO, TaskDTO, TimerDTO,
    UserBase, UserRole,
};

const COMPANY_KEYS: [&str; 8] = ["id", "name", "cvr", "phone", "email", "owner", "ceo", "address"];

fn company_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "cvr": "12345678",
        "phone": "+45 11 22 33 44",
        "email": "hello@example.dk",
        "owner": "Ada Holm",
        "ceo": "Bo Lind",
        "address": "Havnegade 1, 1058 København"
    })
}

fn with_fields(mut base: Value, extra: Value) -> Value {
    let object = base.as_object_mut().unwrap();
    for (key, value) in extra.as_object().unwrap() {
        object.insert(key.clone(), value.clone());
    }
    base
}

fn task_json(id: &str) -> Value {
    json!({
        "id": id,
        "status": "IN_PROGRESS",
        "taskType": "ANNUAL_REPORT",
        "createdAt": "2024-01-10T08:00:00Z",
        "dueDate": "2024-05-31T00:00:00Z",
        "archived": false,
        "hasFile": null
    })
}

fn file_json(id: &str) -> Value {
    json!({
        "id": id,
        "filename": "trial-balance",
        "fileExtension": "xlsx",
        "archived": false,
        "size": 48213
    })
}

fn client_json(id: &str) -> Value {
    with_fields(
        company_json(id, "Fjord Bakery"),
        json!({
            "relationId": format!("rel-{id}"),
            "vat": true,
            "annualReport": true,
            "payroll": false,
            "kyc": true,
            "tasks": [task_json("t-1"), task_json("t-2")],
            "attachments": [file_json("file-1")]
        }),
    )
}

fn assert_company_contract<C: CompanyProfile>(record: &C, id: &str) {
    assert_eq!(record.id(), id);
    assert_eq!(record.cvr(), "12345678");
    assert_eq!(record.phone(), "+45 11 22 33 44");
    assert_eq!(record.email(), "hello@example.dk");
    assert_eq!(record.owner(), "Ada Holm");
    assert_eq!(record.ceo(), "Bo Lind");
    assert_eq!(record.address(), "Havnegade 1, 1058 København");
}

fn assert_round_trip<T>(json: Value)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let decoded: T = codec::decode(&json.to_string()).unwrap();
    let encoded = codec::encode(&decoded).unwrap();
    let again: T = codec::decode(&encoded).unwrap();
    assert_eq!(again, decoded);
    assert_eq!(serde_json::from_str::<Value>(&encoded).unwrap(), json);
}

#[test]
fn company_views_all_satisfy_company_extended() {
    let client_value = client_json("c-1");
    let firm_value = with_fields(company_json("f-1", "Ledger & Co"), json!({ "relations": [] }));
    let light_value = company_json("f-1", "Ledger & Co");
    let settings_value = with_fields(
        company_json("f-1", "Ledger & Co"),
        json!({ "users": [], "tasks": [] }),
    );

    let client: ClientDTO = codec::decode(&client_value.to_string()).unwrap();
    let firm: FirmDTO = codec::decode(&firm_value.to_string()).unwrap();
    let light: FirmLightDTO = codec::decode(&light_value.to_string()).unwrap();
    let settings: FirmSettingsDTO = codec::decode(&settings_value.to_string()).unwrap();

    assert_company_contract(&client, "c-1");
    assert_company_contract(&firm, "f-1");
    assert_company_contract(&light, "f-1");
    assert_company_contract(&settings, "f-1");

    // Every view also decodes as the bare company record
    for value in [&client_value, &firm_value, &light_value, &settings_value] {
        let company: CompanyExtended = codec::decode(&value.to_string()).unwrap();
        assert_eq!(company.cvr, "12345678");
        for key in COMPANY_KEYS {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}

#[test]
fn company_views_require_every_company_key() {
    for key in COMPANY_KEYS {
        let mut value = company_json("f-1", "Ledger & Co");
        value.as_object_mut().unwrap().remove(key);
        assert!(
            codec::decode::<FirmLightDTO>(&value.to_string()).is_err(),
            "decoded without {key}"
        );
    }
}

#[test]
fn client_round_trips_without_loss() {
    assert_round_trip::<ClientDTO>(client_json("c-1"));

    let client: ClientDTO = codec::decode(&client_json("c-1").to_string()).unwrap();
    assert_eq!(client.relation_id, "rel-c-1");
    assert_eq!(
        client.compliance,
        ComplianceFlags {
            vat: true,
            annual_report: true,
            payroll: false,
            kyc: true
        }
    );
    assert_eq!(client.tasks.len(), 2);
    assert_eq!(client.attachments[0].size, 48213);
}

#[test]
fn task_with_null_due_date_stays_null() {
    let value = with_fields(task_json("t-1"), json!({ "dueDate": null }));
    let task: TaskDTO = codec::decode(&value.to_string()).unwrap();
    assert_eq!(task.due_date, None);

    let encoded: Value = serde_json::from_str(&codec::encode(&task).unwrap()).unwrap();
    assert!(encoded["dueDate"].is_null());
    assert!(encoded["hasFile"].is_null());
}

#[test]
fn task_timestamps_survive_round_trip() {
    assert_round_trip::<TaskDTO>(task_json("t-1"));

    let task: TaskDTO = codec::decode(&task_json("t-1").to_string()).unwrap();
    assert_eq!(task.created_at, Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap());
    assert_eq!(
        task.due_date,
        Some(Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap())
    );
}

#[test]
fn engagement_task_with_no_tasks_is_valid() {
    let value = json!({ "id": "rel-1", "firmId": "f-1", "clientId": "c-1", "tasks": [] });
    let relation: EngagementTaskDTO = codec::decode(&value.to_string()).unwrap();
    assert!(relation.tasks.is_empty());
    assert_round_trip::<EngagementTaskDTO>(value);
}

#[test]
fn engagement_round_trips() {
    let value = json!({
        "firm": company_json("f-1", "Ledger & Co"),
        "clients": [client_json("c-1"), client_json("c-2")]
    });
    assert_round_trip::<EngagementDTO>(value.clone());

    let engagement: EngagementDTO = codec::decode(&value.to_string()).unwrap();
    assert_eq!(engagement.firm.name(), "Ledger & Co");
    assert_eq!(engagement.clients.len(), 2);
}

#[test]
fn firm_settings_carry_firm_users_and_client_tasks() {
    let value = with_fields(
        company_json("f-1", "Ledger & Co"),
        json!({
            "users": [
                { "id": "u-1", "name": "Ada Holm", "username": "ada", "role": "OWNER" },
                { "id": "u-2", "name": "Bo Lind", "username": "bo", "role": "EMPLOYEE" }
            ],
            "tasks": [with_fields(task_json("t-1"), json!({ "clientId": "c-1", "clientName": "Fjord Bakery" }))]
        }),
    );
    assert_round_trip::<FirmSettingsDTO>(value.clone());

    let settings: FirmSettingsDTO = codec::decode(&value.to_string()).unwrap();
    assert_eq!(settings.users[0].role(), FirmRole::Owner);
    assert_eq!(settings.tasks[0].client_name, "Fjord Bakery");
    assert_eq!(settings.light().id(), "f-1");
}

#[test]
fn role_universes_are_distinct() {
    let firm_user = json!({ "id": "u-1", "name": "Ada", "username": "ada", "role": "ADMIN" });
    let global_user = json!({ "id": "u-1", "name": "Ada", "username": "ada", "role": "FIRM_ADMIN" });

    let firm: FirmUserDTO = codec::decode(&firm_user.to_string()).unwrap();
    let global: KeycloakUserDTO = codec::decode(&global_user.to_string()).unwrap();
    assert_eq!(firm.role, FirmRole::Admin);
    assert_eq!(global.role, UserRole::FirmAdmin);

    assert!(codec::decode::<FirmUserDTO>(&global_user.to_string()).is_err());
    assert!(codec::decode::<KeycloakUserDTO>(&firm_user.to_string()).is_err());

    let permission = with_fields(
        global_user,
        json!({ "vat": false, "annualReport": false, "payroll": false, "kyc": false }),
    );
    assert!(codec::decode::<PermissionUserDTO>(&permission.to_string()).is_err());
}

#[test]
fn permission_user_round_trips() {
    let value = json!({
        "id": "u-7",
        "name": "Cy Dahl",
        "username": "cy",
        "role": "ADMIN",
        "vat": true,
        "annualReport": true,
        "payroll": false,
        "kyc": false
    });
    assert_round_trip::<PermissionUserDTO>(value);
}

#[test]
fn chat_and_stream_events_round_trip() {
    let message = json!({
        "id": "m-1",
        "senderId": "u-1",
        "senderName": "Ada Holm",
        "message": "Bank statements uploaded",
        "created": "2024-04-02T13:45:10Z"
    });
    let chat = json!({
        "id": "chat-1",
        "engagementId": "eng-1",
        "name": "Annual report 2023",
        "lastMessage": message.clone(),
        "seen": true,
        "messages": [message.clone()]
    });
    let empty_chat = json!({
        "id": "chat-2",
        "engagementId": "eng-1",
        "name": "Payroll",
        "lastMessage": null,
        "seen": false,
        "messages": []
    });

    assert_round_trip::<MessageDTO>(message.clone());
    assert_round_trip::<ChatDTO>(chat);
    assert_round_trip::<ChatDTO>(empty_chat);
    assert_round_trip::<MessageStreamDTO>(json!({ "conversationId": "chat-1", "message": message }));
}

#[test]
fn timers_round_trip_with_open_end() {
    let value = json!({ "id": "timer-1", "start": "2024-02-01T09:00:00Z", "end": null });
    assert_round_trip::<TimerDTO>(value.clone());

    let timer: TimerDTO = codec::decode(&value.to_string()).unwrap();
    assert!(timer.is_running());
}

#[test]
fn required_fields_are_enforced() {
    let mut file = file_json("file-1");
    file.as_object_mut().unwrap().remove("size");
    assert!(codec::decode::<FileDTO>(&file.to_string()).is_err());

    let mut client = client_json("c-1");
    client.as_object_mut().unwrap().remove("kyc");
    assert!(codec::decode::<ClientDTO>(&client.to_string()).is_err());

    let chat_without_messages = json!({
        "id": "chat-1",
        "engagementId": "eng-1",
        "name": "Payroll",
        "lastMessage": null,
        "seen": false
    });
    assert!(codec::decode::<ChatDTO>(&chat_without_messages.to_string()).is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let value = with_fields(file_json("file-1"), json!({ "uploadedBy": "u-1" }));
    let file: FileDTO = codec::decode(&value.to_string()).unwrap();
    assert_eq!(file.id, "file-1");
}

#[test]
fn ids_are_opaque_strings() {
    for id in ["c-1", "42", "3f2a9c1e-0000-4000-8000-000000000000", ""] {
        let client: ClientDTO = codec::decode(&client_json(id).to_string()).unwrap();
        assert_eq!(client.id(), id);
        assert_round_trip::<ClientDTO>(client_json(id));
    }

    let numeric = json!({ "id": 42, "start": "2024-02-01T09:00:00Z", "end": null });
    assert!(codec::decode::<TimerDTO>(&numeric.to_string()).is_err());
}
