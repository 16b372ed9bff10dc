// Model serialization tests (JSON camelCase, optional fields)

use hoststat::models::*;

#[test]
fn test_core_stat_serialization_camel_case() {
    let stat = CoreStat {
        id: 0,
        cores: 4,
        model_name: "ARMv7".into(),
        clock_mhz: 1500.0,
        used: 12.5,
        user_time: 1.0,
        system_time: 2.0,
        idle_time: 3.0,
    };
    let json = serde_json::to_string(&stat).unwrap();
    assert!(json.contains("\"modelName\""));
    assert!(json.contains("\"clockMHz\""));
    assert!(json.contains("\"idleTime\""));
    let back: CoreStat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stat);
}

#[test]
fn test_memory_snapshot_uses_virtual_key() {
    let json = serde_json::to_value(MemorySnapshot::default()).unwrap();
    assert!(json.get("virtual").is_some());
    assert!(json.get("swap").is_some());
    assert!(json["virtual"].get("usedPercent").is_some());
}

#[test]
fn test_load_snapshot_serialization() {
    let json = serde_json::to_value(LoadSnapshot::default()).unwrap();
    for key in ["load1", "load5", "load15", "procsTotal", "procsRunning", "procsBlocked"] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn test_human_account_omits_absent_additional_info() {
    let mut account = HumanAccount {
        username: "pi".into(),
        password_field: "x".into(),
        uid: 1000,
        gid: 1000,
        additional_info: None,
        home_directory: "/home/pi".into(),
        default_shell: "/bin/bash".into(),
    };
    let json = serde_json::to_value(&account).unwrap();
    assert!(json.get("additionalInfo").is_none());
    assert_eq!(json["homeDirectory"], "/home/pi");

    account.additional_info = Some(vec!["Pi User".into()]);
    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(json["additionalInfo"][0], "Pi User");
}

#[test]
fn test_mountpoint_serialization_camel_case() {
    let mp = Mountpoint {
        path: "/".into(),
        fstype: "ext4".into(),
        options: "rw".into(),
        total_bytes: 1000,
        free_bytes: 600,
        used_bytes: 400,
        used_percent: 40.0,
        inodes_total: 10,
        inodes_used: 1,
        inodes_free: 9,
        inodes_used_percent: 10.0,
    };
    let json = serde_json::to_string(&mp).unwrap();
    assert!(json.contains("\"totalBytes\""));
    assert!(json.contains("\"inodesUsedPercent\""));
}
