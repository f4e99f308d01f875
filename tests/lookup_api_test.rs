// ==========================================
// OrderLookupApi 集成测试
// ==========================================
// 测试范围:
// 1. 全表性质: 价格两位小数、状态含日期、详情字段各出现一次
// 2. 客户列表与表中客户一一对应
// 3. 参考数据场景
// 4. 并发会话（不同语言互不影响）
// ==========================================

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use helpers::api_test_helper::{api_with, reference_api};
use helpers::test_data_builder::OrderBuilder;
use order_lookup::{ApiError, QueryKind};

// ==========================================
// 全表性质
// ==========================================

#[test]
fn test_price_answer_has_two_decimals_for_every_record() {
    let api = reference_api();
    for record in api.table().records() {
        let text = api.answer(&record.customer, QueryKind::Price).unwrap().text();
        let price = record.price_2dp();
        assert!(text.contains(&price), "{} 不含 {}", text, price);
        let decimals = price.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 2);
    }
}

#[test]
fn test_status_answer_has_label_and_date_for_every_record() {
    let api = reference_api();
    for record in api.table().records() {
        let text = api.answer(&record.customer, QueryKind::Status).unwrap().text();
        assert!(text.contains(record.status.as_str()));
        assert!(text.contains(&record.order_date_iso()));
    }
}

#[test]
fn test_details_answer_has_each_field_once_for_every_record() {
    let api = reference_api();
    for record in api.table().records() {
        let answer = api.answer(&record.customer, QueryKind::Details).unwrap();
        let text = answer.text();

        assert_eq!(answer.lines.len(), 6);
        assert_eq!(text.matches(&record.material).count(), 1);
        assert_eq!(text.matches(&format!(" {} mm", record.thickness_mm)).count(), 1);
        assert_eq!(text.matches(&record.dimensions).count(), 1);
        assert_eq!(text.matches(record.status.as_str()).count(), 1);
        assert_eq!(text.matches(&record.order_date_iso()).count(), 1);
        assert_eq!(text.matches(&record.price_2dp()).count(), 1);
    }
}

#[test]
fn test_customer_list_equals_distinct_customers() {
    let api = reference_api();
    let listed = api.list_customers();
    let distinct: HashSet<&str> = api
        .table()
        .records()
        .iter()
        .map(|r| r.customer.as_str())
        .collect();

    assert_eq!(listed.len(), distinct.len());
    for customer in &listed {
        assert!(distinct.contains(customer.as_str()));
    }
}

// ==========================================
// 参考数据场景
// ==========================================

#[test]
fn test_scenario_价格_alubal() {
    let text = reference_api().answer("Alubal", QueryKind::Price).unwrap().text();
    assert!(text.contains("94.20"));
}

#[test]
fn test_scenario_状态_metalicas_lozano() {
    let text = reference_api()
        .answer("Metálicas Lozano", QueryKind::Status)
        .unwrap()
        .text();
    assert!(text.contains("Disponible"));
    assert!(text.contains("2025-06-03"));
}

#[test]
fn test_scenario_详情_aceros_albacete() {
    let text = reference_api()
        .answer("Aceros Albacete", QueryKind::Details)
        .unwrap()
        .text();
    for expected in ["Inoxidable", "3", "1500x1000", "Enviado", "2025-05-30", "79.30"] {
        assert!(text.contains(expected), "缺少 {}", expected);
    }
}

#[test]
fn test_scenario_价格_estructuras_hermanos_perez() {
    let text = reference_api()
        .answer("Estructuras Hermanos Pérez", QueryKind::Price)
        .unwrap()
        .text();
    assert!(text.contains("215.00"));
}

#[test]
fn test_scenario_客户不存在() {
    let err = reference_api()
        .answer("Hierros del Sur", QueryKind::Price)
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.to_response().code, "NOT_FOUND");
}

// ==========================================
// 自定义数据
// ==========================================

#[test]
fn test_fixture_table_independent_of_reference_data() {
    let api = api_with(
        vec![
            OrderBuilder::new("Ferralla Sur").price("1200").build(),
            OrderBuilder::new("Talleres Ruiz")
                .material("Aluminio")
                .thickness(2)
                .status("Pendiente de pago")
                .build(),
        ],
        "es",
        "EUR",
    );

    assert_eq!(api.list_customers(), vec!["Ferralla Sur", "Talleres Ruiz"]);
    assert!(api.answer("Alubal", QueryKind::Price).is_err());

    let price = api.answer("Ferralla Sur", QueryKind::Price).unwrap().text();
    assert!(price.contains("1200.00 EUR"));

    // 状态为开放标签，原样输出
    let status = api.answer("Talleres Ruiz", QueryKind::Status).unwrap().text();
    assert!(status.contains("Pendiente de pago"));
}

#[test]
fn test_price_rounding_to_cents_bankers() {
    let api = api_with(
        vec![OrderBuilder::new("Redondeo").price("10.005").build()],
        "es",
        "€",
    );
    let text = api.answer("Redondeo", QueryKind::Price).unwrap().text();
    // 银行家舍入: 10.005 → 10.00，10.015 → 10.02
    assert!(text.contains("10.00 €"), "{}", text);

    let api = api_with(
        vec![OrderBuilder::new("Redondeo").price("10.015").build()],
        "es",
        "€",
    );
    let text = api.answer("Redondeo", QueryKind::Price).unwrap().text();
    assert!(text.contains("10.02 €"), "{}", text);
}

#[test]
fn test_empty_table_lists_no_customers() {
    let api = api_with(vec![], "es", "€");
    assert!(api.list_customers().is_empty());
    assert!(matches!(
        api.answer("Alubal", QueryKind::Status),
        Err(ApiError::NotFound { .. })
    ));
}

// ==========================================
// 并发会话
// ==========================================

#[test]
fn test_concurrent_sessions_with_different_locales() {
    let api = Arc::new(reference_api());

    let handles: Vec<_> = ["es", "en", "zh-CN", "es"]
        .into_iter()
        .enumerate()
        .map(|(i, locale)| {
            let api = Arc::clone(&api);
            thread::spawn(move || {
                let customer = api.list_customers()[i].clone();
                (0..50)
                    .map(|_| {
                        api.answer_in(&customer, QueryKind::Details, locale)
                            .unwrap()
                            .text()
                    })
                    .collect::<HashSet<_>>()
            })
        })
        .collect();

    for handle in handles {
        // 同一输入始终得到同一答复
        assert_eq!(handle.join().unwrap().len(), 1);
    }

    let es = api.answer("Alubal", QueryKind::Details).unwrap().text();
    assert!(es.contains("Espesor"));
}
