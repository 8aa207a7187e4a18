//! The content tables.
//!
//! Three pools feed the resolver:
//! - `HISTORICAL_EVENTS`: date-keyed overrides, `(month 0..=11, day 1..=31)`.
//! - `KNOWLEDGE_BASE`: ordered generic pool for dates without history.
//!   Order is part of the contract — selection is positional.
//! - `QUOTES`: ordered quote archive for records without their own quote.

use crate::event::{Mood, StaticEvent};

const fn event(
    tag: &'static str,
    title: &'static str,
    description: &'static str,
    year_of_event: &'static str,
    quote: Option<&'static str>,
    mood: Option<Mood>,
) -> StaticEvent {
    StaticEvent {
        tag,
        title,
        description,
        year_of_event,
        quote,
        mood,
    }
}

/// 哲学语录库 (The Philosophical Archive).
pub(crate) const QUOTES: &[&str] = &[
    "数理之中，自有万钧之力 (Vires in Numeris)。",
    "代码即律法，共识即疆域。",
    "不信言语，只验真伪 (Don't Trust. Verify)。",
    "数学无言，却道尽万物法则。",
    "私钥在手，主权在我 (Not your keys, not your coins)。",
    "去中心化，乃通往自由之窄门。",
    "区块铭刻永恒，链上见证不朽。",
    "信任机器，而非人性。",
    "账本不可改，历史不可磨。",
    "密码学是防御强权的终极盾牌。",
    "HODL：一场关于时间的苦行。",
    "价格喧嚣，价值静水流深。",
    "人弃我取，人取我予 (Be fearful when others are greedy)。",
    "终局思维：人人皆是中本聪。",
    "星海征途，终将抵达 (WAGMI)。",
    "谦卑入局，聚沙成塔 (Stay humble. Stack sats)。",
    "与其择时而动，不如久伴长情。",
    "耐心，是穿越周期的唯一通票。",
    "这是财富转移，而非财富创造。",
    "未来已降临，只因分布未均。",
    "重塑货币，即重塑文明基石。",
    "我们不只是见证者，更是编年史家。",
    "人人皆为银行 (Be Your Own Bank)。",
    "货币自由，即人之自由。",
    "这场革命，终将去中心化。",
    "始于创世区块，归于浩瀚星辰。",
    "以代码为基石，筑数字之圣殿。",
    "Web3 是互联网的回归。",
];

/// 核心历史事件库 (Historical Timeline), keyed by `(month, day)`.
pub(crate) const HISTORICAL_EVENTS: &[((u32, u32), StaticEvent)] = &[
    // --- January ---
    ((0, 1), event("2026 序章", "光之启幕", "2026年1月1日。欢迎来到“价值自由”的元年。所有的历史，皆为序章。", "2026", Some("让金钱像信息一样自由流动 (Freedom of Money)。"), Some(Mood::Glory))),
    ((0, 2), event("社区文化", "Do 4", "2023年，CZ 发布推文强调 '4'：忽略 FUD、假新闻和攻击。", "2023", Some("忽略杂音，专注建设 (Do 4)。"), None)),
    ((0, 3), event("起源时刻", "创世区块", "2009年，中本聪挖出了比特币的第一个区块（Block #0）。", "2009", Some("泰晤士报头版：旧金融秩序的挽歌。"), Some(Mood::Glory))),
    ((0, 4), event("流量过载", "暂停注册", "2018年，因用户量激增，币安不得不暂停新用户注册进行系统升级。", "2018", Some("拥堵，是变革的前奏。"), None)),
    ((0, 5), event("每日仪式", "Binance WODL", "2022年，Crypto WODL 游戏上线。知识科普与每日打卡仪式。", "2022", Some("懂的人，自然懂。"), None)),
    ((0, 10), event("社区力量", "Running Bitcoin", "2009年，Hal Finney 发布著名的 'Running bitcoin' 推文。", "2009", Some("比特币，正如约运行 (Running bitcoin)。"), None)),
    ((0, 11), event("RWA 里程碑", "贝莱德 BUIDL", "2025年1月，贝莱德宣布其 BUIDL 基金支持 24/7 实时赎回 USDC。", "2025", Some("华尔街的周末，被代码消灭了。"), Some(Mood::Future))),
    ((0, 12), event("首次转账", "第一笔交易", "2009年，中本聪向 Hal Finney 发送了 10 BTC。", "2009", None, None)),
    ((0, 15), event("生态里程碑", "2.5亿用户", "2025年初，币安全球用户数突破 2.5 亿。", "2025", Some("四分之一十亿，共识的新高度。"), None)),
    ((0, 20), event("政治宏叙事", "D.O.G.E. 上任", "2025年1月，马斯克正式领导 '政府效率部' (D.O.G.E.)。", "2025", Some("效率，是最高的道德。"), Some(Mood::Future))),
    ((0, 22), event("慷慨精神", "Red Packet", "Crypto Red Packet（加密红包）改变了社区社交方式。", "LIFE", Some("运气，也是实力的一部分。"), None)),
    ((0, 24), event("IEO 范式", "Launchpad 重启", "2019年，币安 Launchpad 上线 BitTorrent (BTT)。", "2019", None, None)),
    ((0, 29), event("名人效应", "Elon 修改简介", "2021年，Elon Musk 将 Twitter 简介改为 #Bitcoin。", "2021", Some("回首往事，皆是必然。"), None)),
    // --- February ---
    ((1, 8), event("行业名梗", "Funds are SAFU", "2018年，CZ 发推承诺 'All funds are safe'。", "2018", Some("资金安然无恙 (Funds are SAFU)。"), None)),
    ((1, 10), event("支付革命", "X 支付上线", "2025年2月，Elon Musk 的 X 平台正式集成加密支付功能。", "2025", Some("万能应用，终于闭环。"), Some(Mood::Future))),
    ((1, 14), event("Layer 2", "Starknet 空投", "2024年，Starknet 进行大规模空投。", "2024", None, None)),
    ((1, 15), event("品牌进化", "BNB Chain", "2022年，Binance Smart Chain (BSC) 正式更名为 BNB Chain。", "2022", Some("超越币安，构建万物 (Build N Build)。"), None)),
    ((1, 20), event("去中心化", "Binance DEX", "2019年，Binance DEX 测试网正式上线。", "2019", Some("不仅拥有财富，更掌权财富。"), None)),
    // --- March ---
    ((2, 5), event("新起点", "Giggle Academy", "2024年，CZ 宣布启动教育项目 Giggle Academy。", "2024", Some("让知识像空气一样自由流动。"), None)),
    ((2, 11), event("国家战略", "比特币法案", "2025年3月，美国参议员引入《2025 比特币法案》。", "2025", Some("数字黄金，并入国库。"), None)),
    ((2, 12), event("黑天鹅", "3.12 暴跌", "2020年，受全球疫情恐慌影响，加密市场单日暴跌超 50%。", "2020", Some("生存，乃唯一策略。"), Some(Mood::Crisis))),
    ((2, 13), event("技术升级", "Dencun 升级", "2024年，以太坊完成 Dencun 升级，引入 Blob 数据结构。", "2024", Some("让扩展性不再是瓶颈。"), Some(Mood::Future))),
    ((2, 15), event("监管绿灯", "美债上链", "2025年3月，美国财政部发布指导意见，允许受监管实体在公链上发行国债代币。", "2025", Some("国家信用的数字化。"), None)),
    ((2, 18), event("技术硬核", "Pascal 硬分叉", "2025年3月，BNB Chain 激活 Pascal 升级。", "2025", Some("体验无感，技术有痕。"), Some(Mood::Future))),
    ((2, 23), event("交易心理", "拿不住就不富", "CZ 发布名言：'If you can't hold, you won't be rich.'", "CORE", Some("拿不住，便不会富。"), None)),
    ((2, 24), event("心理博弈", "Bitcoin Button", "2022年，'Bitcoin Button' 游戏上线。", "2022", Some("最后一名，才是赢家。"), None)),
    ((2, 28), event("审判日", "SBF 判决", "2024年，Sam Bankman-Fried 被判处 25 年监禁。", "2024", Some("贪婪的代价，是二十五载光阴。"), Some(Mood::Crisis))),
    ((2, 29), event("加密生活", "Binance Card", "2020年，Binance Card 正式发布。", "2020", Some("买咖啡，用 BNB。"), None)),
    // --- April ---
    ((3, 5), event("资产上链", "RWA 万亿时刻", "2025年4月，BlackRock 宣布其链上代币化基金规模突破 100 亿美元。", "2025", Some("传统金融的终点，是链上。"), None)),
    ((3, 18), event("合规巅峰", "迪拜 VASP 牌照", "2024年，币安获得迪拜虚拟资产监管局 (VARA) 颁发的完整 VASP 牌照。", "2024", Some("拥抱监管，方能行稳致远。"), None)),
    ((3, 19), event("至暗时刻", "5.19 大跌", "2021年，市场经历剧烈回调。数百万合约用户在这一天经历了爆仓。", "2021", Some("至暗时刻，恰是黎明伏笔。"), Some(Mood::Crisis))),
    ((3, 20), event("太空经济", "星舰支付", "2025年4月20日，SpaceX 宣布 Starlink 的部分增值服务接受 Dogecoin 支付。", "2025", Some("To the Moon, literally."), Some(Mood::Future))),
    ((3, 22), event("文化图腾", "比特币披萨节", "2010年，Laszlo Hanyecz 用 10,000 BTC 购买了两块披萨。", "2010", Some("史上最昂贵的披萨。"), None)),
    ((3, 30), event("东方力量", "香港 ETF 上市", "2024年，博时、华夏等机构发行的比特币与以太坊现货 ETF 在香港交易所敲钟上市。", "2024", Some("香江水暖，资本先行。"), None)),
    // --- May ---
    ((4, 8), event("铁三角", "何一 (He Yi)", "币安联合创始人何一，被社区尊称为“币安一姐”。", "CORE", Some("用户至上，乃唯一信仰。"), None)),
    ((4, 12), event("监管对话", "SEC 代币化圆桌", "2025年5月，SEC 举行'资产上链'圆桌会议。", "2025", Some("对话取代了诉讼。"), None)),
    ((4, 14), event("监管风暴", "SEC 起诉", "2023年，SEC 宣布起诉币安及 CZ。", "2023", Some("稳住，诸君 (Steady lads)。"), Some(Mood::Crisis))),
    ((4, 17), event("以太坊", "The DAO 攻击", "2016年，黑客利用重入漏洞从 The DAO 盗走 360 万 ETH。", "2016", None, Some(Mood::Crisis))),
    ((4, 20), event("人物动态", "CZ 新身份", "2025年5月，赵长鹏 (CZ) 出任吉尔吉斯斯坦总统数字资产顾问。", "2025", Some("行者无疆，布道不止。"), None)),
    ((4, 23), event("主流化", "ETH ETF", "2024年，SEC 意外批准以太坊现货 ETF 的关键文件。", "2024", Some("代码即石油，驱动未来的引擎。"), None)),
    ((4, 24), event("Meme 永生", "Doge 陨落", "2024年，Doge 表情包原型 Kabosu 离世。", "2024", Some("肉身虽陨，图腾永存 (Doge Forever)。"), None)),
    // --- June ---
    ((5, 8), event("生态里程碑", "两亿用户", "2024年，币安宣布全球注册用户突破 2 亿。", "2024", Some("两亿星火，已成燎原之势。"), None)),
    ((5, 14), event("诞生之日", "币安成立", "2017年，赵长鹏 (CZ) 与团队正式创立 Binance。", "2017", Some("交易全世界 (Exchange the world)。"), Some(Mood::Glory))),
    ((5, 15), event("技术融合", "Beacon Chain Sunset", "2025年（预计），BNB Beacon Chain 完成最终日落。", "2025", Some("双链归一，大道至简。"), Some(Mood::Future))),
    ((5, 18), event("法案落地", "MiCA 全面生效", "2025年中，欧盟 MiCA 法案预计全面落地。", "2025", Some("在规则的框架内，翩以此舞。"), None)),
    ((5, 23), event("绝对巨星", "CR7 Partnership", "2022年，Cristiano Ronaldo (C罗) 正式与币安建立独家 NFT 合作伙伴关系。", "2022", Some("Forever CR7: The GOAT."), None)),
    ((5, 26), event("通缩机制", "首次 BNB 销毁", "2017年，币安完成了第一次 BNB 季度销毁。", "2017", None, None)),
    // --- July ---
    ((6, 1), event("社区战袍", "The Hoodie", "币安的黑金 Logo 卫衣不仅仅是一件衣服，它是行业内最硬通的“社交货币”。", "LIFE", Some("Soft Armor for Hard Builders."), None)),
    ((6, 14), event("八周年", "Be Binance", "[[2025年7月，币安成立八周年。]]", "2025", Some("在一起，才是币安 (Be Together)。"), None)),
    ((6, 20), event("DeFi 融合", "X 牵手 Ripple", "2025年7月，Elon Musk 与 Ripple 确立了 X Payments 的底层结算合作。", "2025", Some("社交的尽头是金融。"), None)),
    ((6, 22), event("国家抛售", "德国政府清仓", "2024年7月，德国政府清空了其查获的 50,000 枚比特币。", "2024", Some("哪怕是国家，也无法撼动共识。"), Some(Mood::Crisis))),
    ((6, 24), event("多链互通", "Centrifuge V3", "2025年7月，RWA 协议 Centrifuge 发布 V3。", "2025", Some("流动性无国界。"), None)),
    // --- August ---
    ((7, 4), event("历史转折", "9.4 监管", "2017年，中国发布《关于防范代币发行融资风险的公告》。币安果断决定'出海'。", "2017", Some("危机，乃进化之契机。"), Some(Mood::Crisis))),
    ((7, 8), event("核心团队", "何一加入", "2017年8月8日，何一正式加入币安担任联合创始人兼 CMO。", "2017", Some("重返战场，只为登顶。"), None)),
    ((7, 13), event("产品里程碑", "合约上线", "2019年，Binance Futures 正式上线。", "2019", None, None)),
    ((7, 15), event("硅基文明", "AI 代理支付", "2025年8月，首个完全由 AI Agent 自主管理的加密钱包完成了一笔跨链交易。", "2025", Some("人类无需插手。"), Some(Mood::Future))),
    ((7, 21), event("主流化", "Coinbase 收录 WLFI", "2025年8月，WLFI 稳定币被列入 Coinbase 上币路线图。", "2025", Some("权力与资本的链上共舞。"), None)),
    ((7, 24), event("应用层", "TON 崛起", "2024年，Telegram 生态 (TON) 用户爆发。", "2024", Some("从聊天窗口，通往价值网络。"), None)),
    ((7, 25), event("官方玩梗", "The Intern", "Binance Intern（实习生）账号是机构号人格化的典范。", "LIFE", Some("Intern > CEO."), None)),
    // --- September ---
    ((8, 1), event("DeFi 夏天", "BSC 上线", "2020年9月1日，Binance Smart Chain (BSC) 主网启动。", "2020", Some("连接 CeFi 与 DeFi 的桥梁。"), None)),
    ((8, 10), event("善意回响", "Giggle 的抉择", "2025年9月，面对社区 Meme 币向 Giggle Academy 的捐赠，CZ 展现了开放的态度。", "2025", Some("善意不问出处。"), None)),
    ((8, 13), event("扩容方案", "opBNB 主网", "2023年，opBNB 主网正式上线。", "2023", Some("速度，即是用户体验。"), None)),
    ((8, 20), event("高性能链", "Solana Firedancer", "2025年9月，Solana 新一代客户端 Firedancer 主网完整上线。", "2025", Some("不仅是快，是瞬时。"), Some(Mood::Future))),
    ((8, 27), event("传奇归来", "CZ 获释", "2024年，CZ 结束拘禁重获自由。", "2024", Some("行者无疆，自由无界。"), None)),
    ((8, 31), event("创世宣言", "比特币白皮书", "2008年，中本聪发布了《比特币：一种点对点的电子现金系统》。", "2008", Some("一种点对点的电子现金系统。"), None)),
    // --- October ---
    ((9, 4), event("第一中文叙事", "币安人生", "2024年10月4日，Binance Life (币安人生) 诞生于 BNB Chain。", "2024", Some("人生由我，币安相随。"), None)),
    ((9, 6), event("大事件", "FTX 崩塌前夕", "2022年，CZ 发推表示决定清算账面上的 FTT 代币。", "2022", Some("光明磊落，不与暗室为谋。"), Some(Mood::Crisis))),
    ((9, 8), event("科技向善", "Binance Charity", "2018年，币安慈善基金会成立。", "2018", Some("善意上链，爱无损耗。"), None)),
    ((9, 12), event("社交进化", "Binance Square", "2022年，Binance Feed（后更名为 Square）上线。", "2022", Some("从交易，到生活。"), None)),
    ((9, 14), event("巨头入局", "贝莱德自研", "2025年10月，CEO Larry Fink 透露贝莱德正在开发专有的资产代币化技术堆栈。", "2025", Some("消除中介，直连价值。"), Some(Mood::Future))),
    ((9, 17), event("数据主权", "Greenfield", "2023年10月，BNB Greenfield 主网正式上线。", "2023", Some("让数据回归所有者。"), Some(Mood::Future))),
    ((9, 20), event("文化官方化", "币安人生", "2025年10月，Binance Futures 上线 'Binance Life' 永续合约。", "2025", Some("人生由我，币安相随 (Life is Binance)。"), None)),
    ((9, 21), event("新时代", "Richard Teng", "2023年，币安与美国监管达成和解，CZ 辞任 CEO，Richard Teng 接棒。", "2023", Some("是时候翻开新的一页了。"), None)),
    ((9, 28), event("上市里程碑", "Securitize 上市", "2025年10月，RWA 龙头 Securitize 宣布通过 SPAC 方式上市。", "2025", Some("代币化企业，登陆纳斯达克。"), None)),
    ((9, 30), event("全球峰会", "迪拜区块链周", "2024年10月，币安区块链周在迪拜举行。", "2024", Some("动量所在，即是未来。"), None)),
    // --- November ---
    ((10, 4), event("AI 进化", "Grok 钱包", "2025年11月，xAI 旗下的 Grok 3.0 模型发布，内置了非托管加密钱包。", "2025", Some("硅基生命的第一笔私房钱。"), Some(Mood::Future))),
    ((10, 6), event("宏观转向", "政治觉醒", "2024年美国大选，加密选民首次成为关键力量。", "2024", Some("选票，即另一种形式的共识。"), None)),
    ((10, 8), event("实体落地", "DePIN 爆发", "2025年11月，DePIN 网络覆盖设备突破 5000 万台。", "2025", Some("代码构建网络，硬件连接世界。"), Some(Mood::Future))),
    ((10, 11), event("顶级掠食者", "MicroStrategy", "2024年，MicroStrategy 持续加仓。", "2024", Some("这不是赌博，这是数学上的必然。"), None)),
    ((10, 12), event("创始人", "中本聪隐退", "2010年，中本聪发布了最后一个帖子后彻底消失。", "2010", Some("火种已播，我将归隐。"), None)),
    ((10, 18), event("长期主义", "HODL", "2013年，GameKyuubi 在论坛醉酒发帖 'I AM HODLING'。", "2013", Some("无论涨跌，我将坚守 (I AM HODLING)。"), None)),
    ((10, 23), event("技术路线", "Lean Ethereum", "2025年11月，Vitalik 确立了 'Lean Ethereum' 路线图。", "2025", Some("做减法，是为了无限的加法。"), Some(Mood::Future))),
    // --- December ---
    ((11, 1), event("巨鲸更名", "Strategy 诞生", "2025年12月，MicroStrategy 正式更名为 'Strategy'。", "2025", Some("名字越短，信仰越深。"), None)),
    ((11, 3), event("精神图腾", "迪拜的 '4'", "2025年12月，Binance Blockchain Week 重返迪拜。", "2025", Some("Ignore FUD, Keep Building."), None)),
    ((11, 4), event("金融未来", "代币化超越 AI", "2025年12月，BlackRock CEO Larry Fink 预言：'资产代币化 (Tokenization) 的影响将超越 AI'。", "2025", Some("万物皆可 Token。"), Some(Mood::Future))),
    ((11, 5), event("社区守护者", "Binance Angels", "12月5日是国际志愿者日。", "LIFE", Some("因为热爱，所以守护。"), None)),
    ((11, 15), event("时代交接", "何一宣言", "2025年底，联席 CEO 何一发出霸气宣言：'CZ is history, I am the future'。", "2025", Some("历史值得铭记，未来更可期。"), None)),
    ((11, 20), event("支付革命", "Binance Pay", "2025年（趋势），Binance Pay 在全球商户覆盖率突破新高。", "2025", Some("支付，如呼吸般自然。"), None)),
    ((11, 25), event("终极里程碑", "3亿用户", "2025年12月，币安宣布全球用户突破 3 亿。", "2025", Some("三百兆星光，汇聚成河。"), Some(Mood::Glory))),
    ((11, 26), event("能源革命", "特斯拉挖矿", "2025年底，特斯拉宣布其 Megapack 储能网络利用多余太阳能进行比特币挖矿。", "2025", Some("能源货币化 (Monetizing Energy)。"), Some(Mood::Future))),
    ((11, 30), event("性能极致", "Fermi 硬分叉", "2025年底，BNB Chain 发布 Fermi 版本。", "2025", Some("唯快不破。"), Some(Mood::Future))),
];

/// 全量知识库 (The Grand Archive). Positional index selection — do not
/// reorder without accepting that every fallback day changes.
pub(crate) const KNOWLEDGE_BASE: &[StaticEvent] = &[
    // --- 01. 警示录 (The Dark Forest) ---
    event("警示录", "门头沟时刻", "2014年，当时占据全球 70% 交易量的 Mt. Gox 宣布破产。", "HISTORY", Some("永远不要把鸡蛋放在别人的篮子里。"), Some(Mood::Crisis)),
    event("警示录", "跨链劫案", "2021年，Poly Network 遭黑客攻击，损失 6.1 亿美元。", "HISTORY", Some("代码虽无眠，人性有缝隙。"), Some(Mood::Crisis)),
    event("警示录", "浪人陨落", "2022年，Axie Infinity 的侧链 Ronin 验证节点遭入侵。", "HISTORY", Some("中心化的代价是安全。"), Some(Mood::Crisis)),
    event("警示录", "死亡螺旋", "2022年5月，算法稳定币 UST 脱锚，LUNA 代币在 48 小时内归零。", "HISTORY", Some("不要试图用左脚踩右脚上天。"), Some(Mood::Crisis)),
    event("警示录", "虫洞危机", "2022年，Solana 跨链桥 Wormhole 遭攻击。", "HISTORY", Some("跨链桥，是黑暗森林中最脆弱的吊桥。"), Some(Mood::Crisis)),
    event("警示录", "Bitfinex 惊魂", "2016年，Bitfinex 遭黑客攻击，损失 12 万枚 BTC。", "HISTORY", Some("信誉是最后的储备金。"), Some(Mood::Crisis)),
    event("警示录", "The DAO", "2016年，基于以太坊的去中心化风投基金 The DAO 遭重入攻击。", "HISTORY", Some("代码即法律？还是共识即法律？"), Some(Mood::Crisis)),
    // --- 02. 硬核技术 (The Machinery) ---
    event("技术底座", "UTXO 模型", "Unspent Transaction Output。比特币的记账方式。", "TECH", Some("每一枚比特币，都是历史交易的余烬。"), None),
    event("扩容方案", "ZK-SNARKs", "零知识简洁非交互式知识论证。隐私与扩容的圣杯。", "TECH", Some("数学是唯一不需要信任的信任。"), None),
    event("扩容方案", "Danksharding", "以太坊的终极分片方案。", "TECH", Some("让大象起舞，让数据分流。"), None),
    event("经济模型", "无常损失", "Impermanent Loss：向 AMM 提供流动性的风险。", "TECH", Some("所谓无常，皆是由于价格的偏离。"), None),
    event("基础设施", "内存池 (Mempool)", "交易被广播但尚未打包进区块的等待区。", "TECH", Some("在上链之前，所有交易都在这里屏息以待。"), None),
    event("密码学", "默克尔树", "Merkle Tree：一种哈希二叉树结构。", "TECH", Some("一叶知秋，一树知链。"), None),
    event("新范式", "模块化区块链", "Modular Blockchain：执行、结算、共识和数据可用性层拆分。", "TECH", Some("像乐高积木一样重构信任。"), None),
    event("共识机制", "权益证明 (PoS)", "Proof of Stake：通过质押代币来获得记账权。", "TECH", Some("资本的共识。"), None),
    event("技术底座", "智能合约", "Smart Contract：部署在区块链上的自动执行程序。", "TECH", Some("Code is Law."), None),
    // --- 03. 先驱之声 (The Philosophers) ---
    event("先驱之声", "中本聪的预言", "“如果那个该死的想吃就吃，想穿就穿的东西（法币）不曾出现，我们本不需要这些。”", "VOICE", Some("传统货币的根本问题，在于信任。"), None),
    event("先驱之声", "尼克·萨博", "Nick Szabo，智能合约之父。", "VOICE", Some("Trusted third parties are security holes."), None),
    event("先驱之声", "安德烈亚斯", "Andreas Antonopoulos。“投资教育，而不是投机。”", "VOICE", Some("Your mind is the wallet no one can hack."), None),
    event("先驱之声", "维塔利克", "Vitalik Buterin。“建立一个擅长做一件事的协议：作为底层的安全层。”", "VOICE", Some("以太坊：世界计算机。"), None),
    event("先驱之声", "哈尔·芬尼", "Hal Finney，比特币第一位接收者。", "VOICE", Some("Running bitcoin."), None),
    event("先驱之声", "CZ 的坚持", "“如果你因为 FUD 而恐慌抛售，你可能不适合这个行业。”", "VOICE", Some("Ignore FUD."), None),
    // --- 04. 生态考古 (The Origins) ---
    event("DeFi 创世", "Uniswap 诞生", "2018年，Hayden Adams 部署了 Uniswap V1。", "ORIGIN", Some("独角兽，始于几行代码。"), None),
    event("NFT 鼻祖", "CryptoPunks", "2017年，Larva Labs 免费发放了 10,000 个像素头像。", "ORIGIN", Some("朋克精神，永不过时。"), None),
    event("稳定币", "Tether (USDT)", "Realcoin 更名为 Tether。", "ORIGIN", Some("流动性的血管。"), None),
    event("预言机", "Chainlink", "Sergey Nazarov 提出了去中心化预言机网络。", "ORIGIN", Some("真相，是连接现实的接口。"), None),
    event("DeFi 基石", "MakerDAO", "DeFi 的中央银行。", "ORIGIN", Some("无需许可的稳定性。"), None),
    event("借贷协议", "Aave", "前身是 ETHLend。", "ORIGIN", Some("让资金在区块间无缝流转。"), None),
    event("NFT 市场", "OpenSea", "曾是 NFT 领域的绝对霸主。", "ORIGIN", Some("数字海洋的领航员。"), None),
    // --- 05. 2026 前沿概念与文化 (The Frontier & Culture) ---
    event("精神图腾", "数字 4", "源自 CZ 的推文。忽略 FUD，专注建设。", "CULTURE", Some("4. Ignore FUD."), None),
    event("社区神话", "币安天使", "他们不是员工，没有薪水，却比任何人都更爱护这个平台。", "CULTURE", Some("因热爱而聚，为信仰而战。"), None),
    event("Meme 文化", "Giggle Academy", "CZ 的个人教育项目。不发币、全免费。", "CULTURE", Some("让教育平权。"), None),
    event("行业俚语", "币安人生", "Binance Life：指一种全职投入加密货币、以交易所为家的生活状态。", "CULTURE", None, None),
    event("Meme 文化", "D.O.G.E.", "Department of Government Efficiency。马斯克领导的政府部门。", "CULTURE", None, None),
    event("机器经济", "Agentic Economy", "2026年，大量链上交易将由 AI 机器人产生。", "CONCEPT", Some("硅基生命的 GDP。"), None),
    event("金融融合", "RWA 爆发", "美债、房地产上链成为常态。", "CONCEPT", None, None),
    event("支付革命", "PayFi", "DeFi 的下一个演进形态。利用链上资金的时间价值。", "CONCEPT", None, None),
    event("去中心化科学", "DeSci", "用 DAO 来资助长寿研究、太空探索等前沿科学。", "CONCEPT", Some("科学属于全人类。"), None),
    event("政治概念", "加密选民", "指在选举中根据候选人对加密货币态度进行投票的群体。", "CONCEPT", Some("选票即共识。"), None),
    event("用户体验", "Chain Abstraction", "链抽象：用户不再知道自己在用哪条链。", "CONCEPT", Some("忘掉链，只看路。"), None),
    event("金融哲学", "原子结算", "Atomic Settlement：交易即清算。", "CONCEPT", Some("时间就是金钱，字面意义上。"), None),
    // --- Legacy basic concepts ---
    event("核心原理", "去中心化", "网络不由单一实体控制。", "CONCEPT", None, None),
    event("技术底层", "区块链", "一个只能追加、不可篡改的分布式账本。", "CONCEPT", None, None),
    event("共识机制", "工作量证明", "PoW：通过消耗算力解决数学难题来竞争记账权。", "CONCEPT", None, None),
    event("资产安全", "私钥", "一串随机生成的字符，代表了对钱包内资产的绝对控制权。", "CONCEPT", Some("私钥在手，主权在我 (Not your keys, not your coins)。"), None),
    event("投资策略", "DYOR", "Do Your Own Research：在投资前做好自己的研究。", "CONCEPT", Some("不信言语，只验真伪。"), None),
    event("市场心理", "FUD", "Fear, Uncertainty, Doubt：恐惧、不确定和怀疑。", "CONCEPT", None, None),
    event("未来趋势", "AI x Crypto", "当生产力 (AI) 遇到生产关系 (Crypto)。", "CONCEPT", None, None),
    event("DeFi", "AMM", "自动做市商：DEX 的核心机制。", "CONCEPT", None, None),
    event("Web3", "DAO", "去中心化自治组织：没有 CEO，规则写入代码。", "CONCEPT", None, None),
    event("经济模型", "减半", "比特币每四年产出减半的机制。", "CONCEPT", None, None),
    event("技术前沿", "账户抽象", "ERC-4337 标准。", "CONCEPT", Some("让区块链技术隐于无形。"), None),
    event("扩容方案", "Layer 2", "在主链之上构建的协议层。", "CONCEPT", None, None),
    event("数据层", "预言机", "Oracle：连接区块链与现实世界的桥梁。", "CONCEPT", None, None),
    event("隐私计算", "零知识证明", "Zero-Knowledge Proof。", "CONCEPT", Some("于无声处，听惊雷。"), None),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::days_in_month;

    // Positional selection makes the pool sizes part of the contract.
    #[test]
    fn pool_sizes_are_pinned() {
        assert_eq!(KNOWLEDGE_BASE.len(), 55);
        assert_eq!(QUOTES.len(), 28);
    }

    #[test]
    fn override_keys_are_real_calendar_days() {
        for ((month, day), entry) in HISTORICAL_EVENTS {
            assert!(*month <= 11, "bad month in key for {}", entry.title);
            assert!(
                *day >= 1 && *day <= days_in_month(*month),
                "unreachable day {month}-{day} for {}",
                entry.title
            );
        }
    }

    #[test]
    fn override_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (key, entry) in HISTORICAL_EVENTS {
            assert!(seen.insert(*key), "duplicate key {key:?} for {}", entry.title);
        }
    }

    #[test]
    fn no_table_entry_is_blank() {
        for entry in KNOWLEDGE_BASE
            .iter()
            .chain(HISTORICAL_EVENTS.iter().map(|(_, e)| e))
        {
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.tag.is_empty());
            assert!(!entry.year_of_event.is_empty());
            if let Some(quote) = entry.quote {
                assert!(!quote.is_empty());
            }
        }
    }
}
