use std::sync::{Arc, Mutex};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource, Operation};

use crate::registers::{
    Bank, CHIP_PIDH, MANUFACTURER_ID, REG_BANK_SEL, SCCB_ADDRESS, SENSOR_MIDH, SENSOR_MIDL,
    SENSOR_PIDH, SENSOR_PIDL,
};

/// 記録されたレジスタ書き込み（バンク選択は含まない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedWrite {
    pub bank: Bank,
    pub reg: u8,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBusError {
    /// 想定外のアドレスへのアクセス
    NoAcknowledge,
    /// テストから注入されたエラー
    Simulated,
}

impl i2c::Error for MockBusError {
    fn kind(&self) -> ErrorKind {
        match self {
            MockBusError::NoAcknowledge => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
            MockBusError::Simulated => ErrorKind::Other,
        }
    }
}

#[derive(Debug)]
struct SccbState {
    address: u8,
    registers: [[u8; 256]; 2],
    bank: Bank,
    pointer: u8,
    writes: Vec<RecordedWrite>,
    bank_selects: usize,
    reads: usize,
    fail_all: bool,
    /// 残り何回の書き込みを成功させるか
    fail_after: Option<usize>,
}

impl SccbState {
    fn bank_index(bank: Bank) -> usize {
        match bank {
            Bank::Dsp => 0,
            Bank::Sensor => 1,
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), MockBusError> {
        if let Some(remaining) = self.fail_after.as_mut() {
            if *remaining == 0 {
                return Err(MockBusError::Simulated);
            }
            *remaining -= 1;
        }

        let Some((&reg, data)) = bytes.split_first() else {
            return Ok(());
        };
        self.pointer = reg;
        for &value in data {
            if reg == REG_BANK_SEL {
                self.bank = if value & 0x01 == 0x01 {
                    Bank::Sensor
                } else {
                    Bank::Dsp
                };
                self.registers[0][REG_BANK_SEL as usize] = value;
                self.registers[1][REG_BANK_SEL as usize] = value;
                self.bank_selects += 1;
            } else {
                self.registers[Self::bank_index(self.bank)][reg as usize] = value;
                self.writes.push(RecordedWrite {
                    bank: self.bank,
                    reg,
                    value,
                });
            }
        }
        Ok(())
    }

    fn read(&mut self, buffer: &mut [u8]) {
        let bank = Self::bank_index(self.bank);
        for byte in buffer.iter_mut() {
            *byte = self.registers[bank][self.pointer as usize];
        }
        self.reads += 1;
    }
}

/// テスト用のSCCBバスモック
///
/// DSP/センサーの2バンク分のレジスタファイルを持ち、0xFF への書き込みで
/// バンクを切り替えます。状態は `Arc<Mutex<_>>` で共有されるため、
/// クローンをドライバに渡した後でもテスト側から検証できます。
#[derive(Debug, Clone)]
pub struct MockSccb {
    state: Arc<Mutex<SccbState>>,
}

impl Default for MockSccb {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSccb {
    /// OV2640 (PID 0x2642) として応答するモックを作成します
    pub fn new() -> Self {
        Self::with_chip_id(CHIP_PIDH, 0x42)
    }

    pub fn with_chip_id(pid: u8, ver: u8) -> Self {
        let mut registers = [[0u8; 256]; 2];
        let sensor = SccbState::bank_index(Bank::Sensor);
        registers[sensor][SENSOR_PIDH as usize] = pid;
        registers[sensor][SENSOR_PIDL as usize] = ver;
        let [mid_high, mid_low] = MANUFACTURER_ID.to_be_bytes();
        registers[sensor][SENSOR_MIDH as usize] = mid_high;
        registers[sensor][SENSOR_MIDL as usize] = mid_low;

        Self {
            state: Arc::new(Mutex::new(SccbState {
                address: SCCB_ADDRESS,
                registers,
                bank: Bank::Dsp,
                pointer: 0,
                writes: Vec::new(),
                bank_selects: 0,
                reads: 0,
                fail_all: false,
                fail_after: None,
            })),
        }
    }

    /// テスト用: レジスタに初期値を設定
    pub fn preload(&self, bank: Bank, reg: u8, value: u8) {
        self.state.lock().unwrap().registers[SccbState::bank_index(bank)][reg as usize] = value;
    }

    /// テスト用: レジスタの現在値を取得
    pub fn register(&self, bank: Bank, reg: u8) -> u8 {
        self.state.lock().unwrap().registers[SccbState::bank_index(bank)][reg as usize]
    }

    /// テスト用: 記録された書き込みを取得
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.state.lock().unwrap().writes.clone()
    }

    /// テスト用: 指定バンクへの (reg, value) の書き込みを取得
    pub fn writes_in(&self, bank: Bank) -> Vec<(u8, u8)> {
        self.writes()
            .into_iter()
            .filter(|w| w.bank == bank)
            .map(|w| (w.reg, w.value))
            .collect()
    }

    pub fn bank_selects(&self) -> usize {
        self.state.lock().unwrap().bank_selects
    }

    pub fn reads(&self) -> usize {
        self.state.lock().unwrap().reads
    }

    /// テスト用: 記録をクリア（レジスタ値は保持）
    pub fn clear_log(&self) {
        let mut state = self.state.lock().unwrap();
        state.writes.clear();
        state.bank_selects = 0;
        state.reads = 0;
    }

    /// テスト用: すべてのトランザクションを失敗させる
    pub fn set_bus_error(&self, enable: bool) {
        self.state.lock().unwrap().fail_all = enable;
    }

    /// テスト用: `count` 回の書き込み成功後に書き込みを失敗させる
    pub fn fail_after_writes(&self, count: usize) {
        self.state.lock().unwrap().fail_after = Some(count);
    }
}

impl i2c::ErrorType for MockSccb {
    type Error = MockBusError;
}

impl i2c::I2c for MockSccb {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.lock().unwrap();
        if state.fail_all {
            return Err(MockBusError::Simulated);
        }
        if address != state.address {
            return Err(MockBusError::NoAcknowledge);
        }
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => state.write(bytes)?,
                Operation::Read(buffer) => state.read(buffer),
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// テスト用の出力ピンモック（出力レベルの履歴を記録）
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    levels: Arc<Mutex<Vec<bool>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// 出力されたレベルの履歴（true = High）
    pub fn levels(&self) -> Vec<bool> {
        self.levels.lock().unwrap().clone()
    }

    /// 最後に出力されたレベル
    pub fn is_high(&self) -> Option<bool> {
        self.levels.lock().unwrap().last().copied()
    }

    /// テスト用: ピン書き込みエラーをシミュレート
    pub fn set_failure(&self, enable: bool) {
        *self.fail.lock().unwrap() = enable;
    }

    fn drive(&self, high: bool) -> Result<(), MockPinError> {
        if *self.fail.lock().unwrap() {
            return Err(MockPinError);
        }
        self.levels.lock().unwrap().push(high);
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

/// テスト用のディレイモック（待ち時間を積算するだけ）
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    total_ns: Arc<Mutex<u64>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        *self.total_ns.lock().unwrap() / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.lock().unwrap() += u64::from(ns);
    }
}
