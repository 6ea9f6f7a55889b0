// ============================================================================
// Toxide - Chinese Translation Table
// ============================================================================
//
// File: src/i18n/zh_cn.rs
// Responsibility: Chinese translation content definition
// Boundaries:
//   - ✅ Chinese translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ No translation logic
//   - ❌ No business logic
//   - ❌ No other language translations
//
// ============================================================================

/// Chinese translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Run 命令相关
    ("run.env_count", "已选择 {} 个环境"),
    ("run.parallel_mode", "并行执行，{} 个工作进程"),
    ("run.serial_mode", "并行执行已禁用，串行运行"),
    ("run.all_passed", "所有环境均已通过"),
    ("run.envs_failed", "失败的环境: {}"),
    // 执行器相关
    ("executor.phase_start", "阶段 {}/{}"),
    ("executor.env_start", "正在运行环境: {}"),
    ("executor.env_success", "环境 {} 通过，耗时 {} 秒"),
    ("executor.env_failed", "环境 {} 失败，耗时 {} 秒"),
    ("executor.env_skipped", "环境 {} 没有命令，已跳过"),
    ("executor.env_stderr", "最后输出: {}"),
    ("executor.env_timeout", "环境 {} 执行超时"),
    ("executor.no_commands", "未配置命令"),
    ("executor.cancelled", "启动前已取消"),
    ("executor.command_run", "[{}] $ {}"),
    ("executor.command_stdout", "标准输出: {}"),
    ("executor.command_stderr", "标准错误: {}"),
    ("executor.command_failed", "命令失败: {} (退出码 {})"),
    ("executor.command_tolerated", "[{}] 命令失败但已标记为容错: {}"),
    ("executor.command_spawn_failed", "无法启动 {}: {}"),
    ("executor.group_failed", "分组 {} 中存在失败的环境: {}"),
    ("executor.job_failed", "任务 {} 失败: {}"),
    ("executor.job_cancelled", "任务 {} 已取消"),
    ("executor.fail_fast_stop", "阶段失败后停止执行 (快速失败)"),
    // 调度器相关
    ("scheduler.batch_start", "正在分发 {} 个任务"),
    ("scheduler.batch_complete", "批次完成: {}/{} 成功"),
    ("scheduler.job_start", "任务 {} 已启动"),
    ("scheduler.job_success", "任务 {} 成功，耗时 {} 秒"),
    ("scheduler.job_failed", "任务 {} 失败，耗时 {} 秒: {}"),
    ("scheduler.job_timeout", "任务 {} 超时，耗时 {} 秒"),
    ("scheduler.job_cancelled", "任务 {} 已取消"),
    ("scheduler.job_join_error", "任务发生崩溃: {}"),
    ("scheduler.fail_fast_triggered", "任务 {} 失败，正在取消等待中的任务"),
    ("scheduler.stopping_all_jobs", "正在停止所有等待中的任务"),
    // 运行界面相关
    ("runner.phase_header", "阶段 {}/{}"),
    ("runner.phase_complete", "阶段 {}/{} 已完成"),
    ("runner.running_envs", "正在运行的环境"),
    ("runner.more_envs", "... 另有 {} 个"),
    // 汇总相关
    ("summary.header", "运行汇总"),
    ("summary.total_envs", "环境总数: {}"),
    ("summary.passed_envs", "通过: {}"),
    ("summary.failed_envs", "失败: {}"),
    ("summary.skipped_envs", "跳过: {}"),
    ("summary.duration", "耗时: {} 秒"),
    ("summary.env_results", "环境结果"),
    ("summary.env_duration", "({} 秒)"),
    ("summary.env_skipped", "(已跳过)"),
    ("summary.failed_command", "    {} {} (退出码 {})"),
    ("summary.failed_list", "失败: {}"),
    // List 命令相关
    ("list.envlist", "envlist: {}"),
    ("list.no_envs", "未配置任何环境"),
    ("list.command_count", "      {} 条命令"),
    ("list.default_env", "隐式默认环境: {}"),
    // Show 命令相关
    ("show.unknown_env", "未知环境: {}"),
    ("show.toxinidir", "toxinidir: {}"),
    ("show.envlist", "envlist: {}"),
    ("show.distshare", "distshare: {}"),
    ("show.pytest_header", "[pytest]"),
    ("show.flake8_header", "[flake8]"),
    ("show.envs_header", "环境列表:"),
    ("show.default_env", "隐式默认环境: {}"),
    ("show.basepython", "  basepython: {}"),
    ("show.group", "  分组: {} ({})"),
    ("show.setenv_header", "  setenv:"),
    ("show.deps_header", "  deps:"),
    ("show.commands_header", "  commands:"),
    ("show.no_commands", "  未配置命令"),
    // Check 命令相关
    ("check.start", "正在检查配置..."),
    ("check.no_issues", "配置没有问题"),
    ("check.issue_details", "配置问题"),
    ("check.issue_counts", "{} 个错误，{} 个警告"),
    ("check.failed", "配置检查失败，共 {} 个错误"),
    // Init 命令相关
    ("init.start", "正在初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.next_steps", "编辑 envlist 和 commands 后运行 `toxide run`"),
    ("init.create_failed", "创建配置文件失败: {}"),
];
