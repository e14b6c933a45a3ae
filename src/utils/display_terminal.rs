//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 최종 요약을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 Customer Service                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 하위 항목을 트리 형태로 표시합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 완료 요약을 출력합니다
pub fn print_startup_summary(bind_address: &str, database: &str) {
    println!();
    print_boxed_title("CUSTOMER SERVICE READY");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   🗄️  Database: {}", database);
    println!("   📍 Health check: http://{}/healthcheck", bind_address);
    println!();
}
